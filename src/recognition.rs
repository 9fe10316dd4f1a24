//! Word recognition over possibly-nondeterministic, possibly epsilon-bearing
//! automata.

use std::collections::BTreeSet;

use crate::automaton::{Automaton, StateId, EPSILON};

impl Automaton {
    /// The set of states reachable by consuming `word` symbol-by-symbol
    /// from every initial state, epsilon-closing before the first symbol
    /// and after every symbol consumed. Returns the empty set if any
    /// symbol of `word` is neither epsilon nor a member of the alphabet.
    pub fn read_string(&self, word: &[u8]) -> BTreeSet<StateId> {
        debug_assert!(self.is_valid(), "read_string requires a valid automaton");
        let mut frontier = self.epsilon_closure_of(self.initial_states());
        for &symbol in word {
            if symbol != EPSILON && !self.has_symbol(symbol) {
                return BTreeSet::new();
            }
            let stepped = self.successors_of_set(&frontier, symbol);
            frontier = self.epsilon_closure_of(stepped);
        }
        frontier
    }

    /// True iff `word` reaches at least one final state.
    pub fn matches(&self, word: &[u8]) -> bool {
        self.read_string(word)
            .iter()
            .any(|&s| self.is_state_final(s))
    }
}
