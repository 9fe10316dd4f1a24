//! Subset construction.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::{debug, trace};

use crate::automaton::{Automaton, StateId};
use crate::pruning::{PRUNING_STUB_SYMBOL, STUB_STATE};

impl Automaton {
    /// Subset construction: the deterministic automaton equivalent to
    /// `self`.
    ///
    /// Requires `self` to be epsilon-free (unchecked, `debug_assert!`
    /// only) — determinization never calls [`Automaton::without_epsilon`]
    /// on the caller's behalf, matching the original reference
    /// implementation, which only ever iterates the alphabet when
    /// stepping a macro-state and so silently ignores any epsilon
    /// transition present on the input.
    ///
    /// If `self` is already deterministic, returns a structural copy.
    /// Otherwise performs the standard worklist subset construction,
    /// reusing an existing macro-state's id whenever a newly computed
    /// successor set already has one. If the input had no initial state at
    /// all, no macro-state is ever created and the validity stub (`42`,
    /// symbol `'q'`) is installed; the alphabet itself is never empty here
    /// since it is copied from the (valid) input before the worklist runs.
    pub fn determinize(&self) -> Automaton {
        debug_assert!(self.is_valid(), "determinize requires a valid automaton");
        debug_assert!(
            !self.has_epsilon_transition(),
            "determinize requires an epsilon-free automaton"
        );
        if self.is_deterministic() {
            return self.clone();
        }

        let mut result = Automaton::new();
        for symbol in self.alphabet() {
            result.add_symbol(symbol);
        }

        let mut macro_states: Vec<BTreeSet<StateId>> = Vec::new();
        let mut ids: BTreeMap<Vec<StateId>, StateId> = BTreeMap::new();
        let mut queue: VecDeque<StateId> = VecDeque::new();

        let initial: BTreeSet<StateId> = self.initial_states().collect();
        if !initial.is_empty() {
            let key: Vec<StateId> = initial.iter().copied().collect();
            let id = 0;
            ids.insert(key, id);
            macro_states.push(initial.clone());
            result.add_state(id);
            result.set_state_initial(id);
            if initial.iter().any(|&s| self.is_state_final(s)) {
                result.set_state_final(id);
            }
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let current = macro_states[id as usize].clone();
            for symbol in self.alphabet() {
                let target = self.successors_of_set(&current, symbol);
                if target.is_empty() {
                    continue;
                }
                let key: Vec<StateId> = target.iter().copied().collect();
                let to_id = *ids.entry(key).or_insert_with(|| {
                    let new_id = macro_states.len() as StateId;
                    macro_states.push(target.clone());
                    result.add_state(new_id);
                    if target.iter().any(|&s| self.is_state_final(s)) {
                        result.set_state_final(new_id);
                    }
                    queue.push_back(new_id);
                    new_id
                });
                result.add_transition(id, symbol, to_id);
            }
        }

        trace!(macro_states = macro_states.len(), "determinized");
        if !result.is_valid() {
            debug!("determinize found no initial macro-state, installing stub");
            result = Automaton::new();
            result.add_symbol(PRUNING_STUB_SYMBOL);
            result.add_state(STUB_STATE);
            result.set_state_initial(STUB_STATE);
        }
        result
    }
}
