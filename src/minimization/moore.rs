//! Moore partition refinement.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::automaton::{Automaton, StateId};

impl Automaton {
    /// Minimizes `self` by Moore partition refinement.
    ///
    /// First normalizes the input into a complete, accessible DFA
    /// (`determinize().complete().remove_non_accessible_states()`, any of
    /// which may itself trigger its own validity stub on a sufficiently
    /// degenerate input), then refines a partition of that DFA's states
    /// until the transition-signature classes stop splitting.
    ///
    /// States start split into two classes — final and non-final — and
    /// every round thereafter a state's class is determined by its
    /// current class together with the current class of every successor,
    /// one per symbol in ascending order. New class ids are assigned in
    /// the order those signatures are first seen (iterating states in
    /// ascending id order), which keeps the numbering stable across runs
    /// on the same input and makes the fixed point well-defined: at most
    /// `|Q|` rounds before no further split occurs.
    pub fn minimize_moore(&self) -> Automaton {
        debug_assert!(self.is_valid(), "minimize_moore requires a valid automaton");
        let normalized = self
            .determinize()
            .complete()
            .remove_non_accessible_states();

        let alphabet: Vec<u8> = normalized.alphabet().collect();
        let states: Vec<StateId> = normalized.states().collect();

        let mut partition: BTreeMap<StateId, usize> = states
            .iter()
            .map(|&s| (s, if normalized.is_state_final(s) { 2 } else { 1 }))
            .collect();

        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut signature_to_class: BTreeMap<Vec<usize>, usize> = BTreeMap::new();
            let mut next_class = 1;
            let mut refined: BTreeMap<StateId, usize> = BTreeMap::new();

            for &s in &states {
                let mut signature = Vec::with_capacity(1 + alphabet.len());
                signature.push(partition[&s]);
                for &a in &alphabet {
                    let target = normalized
                        .successors(s, a)
                        .next()
                        .expect("normalized automaton is complete");
                    signature.push(partition[&target]);
                }
                let class = *signature_to_class.entry(signature).or_insert_with(|| {
                    let c = next_class;
                    next_class += 1;
                    c
                });
                refined.insert(s, class);
            }

            if refined == partition {
                partition = refined;
                break;
            }
            partition = refined;
        }
        trace!(rounds, classes = partition.values().collect::<BTreeSet<_>>().len(), "moore stabilized");

        let mut result = Automaton::new();
        for &a in &alphabet {
            result.add_symbol(a);
        }
        let class_ids: BTreeSet<usize> = partition.values().copied().collect();
        for &c in &class_ids {
            result.add_state(c as StateId);
        }
        for &s in &states {
            let c = partition[&s] as StateId;
            if normalized.is_state_initial(s) {
                result.set_state_initial(c);
            }
            if normalized.is_state_final(s) {
                result.set_state_final(c);
            }
        }
        for &s in &states {
            let c = partition[&s] as StateId;
            for &a in &alphabet {
                let target = normalized
                    .successors(s, a)
                    .next()
                    .expect("normalized automaton is complete");
                let target_class = partition[&target] as StateId;
                result.add_transition(c, a, target_class);
            }
        }
        debug!(
            states_before = states.len(),
            states_after = result.count_states(),
            "moore minimization complete"
        );
        result
    }
}
