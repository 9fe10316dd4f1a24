//! Synchronous product (intersection).

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use crate::automaton::{Automaton, StateId};
use crate::pruning::STUB_STATE;

/// The symbol used by the product builder's alphabet-only validity patch.
const PRODUCT_STUB_SYMBOL: u8 = b'z';

impl Automaton {
    /// The synchronous product of `self` and `other`: accepts
    /// `L(self) ∩ L(other)` restricted to the shared alphabet.
    ///
    /// Pair-states are materialized lazily with fresh sequential ids
    /// starting at 0, seeded from every pair of initial states. If no
    /// pair-state is ever materialized (neither automaton had an initial
    /// state, or no initial pair existed), the whole result is discarded
    /// and replaced by a single fresh initial state (`42`) with no
    /// symbols. Independently of that, if the (possibly just-replaced)
    /// result ends up with an empty alphabet, the symbol `'z'` is added.
    /// Applying these as two separate, sequential patches — not one
    /// combined "reset to stub" branch — is what a single combined check
    /// would get wrong: when pair-states exist but the two alphabets
    /// happen to be disjoint, only the second patch fires, and the
    /// initial/final flags already computed survive untouched. That is
    /// what keeps `L(self × other) = {""}` correct whenever both operands
    /// accept the empty word.
    pub fn product(&self, other: &Automaton) -> Automaton {
        debug_assert!(self.is_valid(), "product requires a valid left automaton");
        debug_assert!(other.is_valid(), "product requires a valid right automaton");

        let shared_alphabet: Vec<u8> = self
            .alphabet()
            .filter(|a| other.has_symbol(*a))
            .collect();

        let mut ids: BTreeMap<(StateId, StateId), StateId> = BTreeMap::new();
        let mut result = Automaton::new();
        for &symbol in &shared_alphabet {
            result.add_symbol(symbol);
        }

        let mut next_id: StateId = 0;
        let mut queue: VecDeque<(StateId, StateId)> = VecDeque::new();
        for p in self.initial_states() {
            for q in other.initial_states() {
                let pair = (p, q);
                let id = next_id;
                next_id += 1;
                ids.insert(pair, id);
                result.add_state(id);
                result.set_state_initial(id);
                if self.is_state_final(p) && other.is_state_final(q) {
                    result.set_state_final(id);
                }
                queue.push_back(pair);
            }
        }

        while let Some((p, q)) = queue.pop_front() {
            let from_id = ids[&(p, q)];
            for &symbol in &shared_alphabet {
                for p2 in self.successors(p, symbol) {
                    for q2 in other.successors(q, symbol) {
                        let pair = (p2, q2);
                        let to_id = *ids.entry(pair).or_insert_with(|| {
                            let id = next_id;
                            next_id += 1;
                            result.add_state(id);
                            if self.is_state_final(p2) && other.is_state_final(q2) {
                                result.set_state_final(id);
                            }
                            queue.push_back(pair);
                            id
                        });
                        result.add_transition(from_id, symbol, to_id);
                    }
                }
            }
        }

        if result.count_states() == 0 {
            debug!("product materialized no pair-states, installing stub");
            result = Automaton::new();
            result.add_state(STUB_STATE);
            result.set_state_initial(STUB_STATE);
        }
        if result.count_symbols() == 0 {
            debug!("product has an empty shared alphabet, patching in a symbol");
            result.add_symbol(PRODUCT_STUB_SYMBOL);
        }

        result
    }

    /// True iff `L(self) ∩ L(other) = ∅`.
    pub fn has_empty_intersection_with(&self, other: &Automaton) -> bool {
        self.product(other).is_language_empty()
    }
}
