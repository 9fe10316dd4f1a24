//! Epsilon elimination.

use std::collections::BTreeMap;

use crate::automaton::{Automaton, StateId, EPSILON};

impl Automaton {
    /// An epsilon-free automaton accepting the same language as `self`,
    /// over the same states, alphabet, and initial states.
    ///
    /// For every state `s`, let `close(s)` be its epsilon-closure. `s` is
    /// final in the result iff `close(s)` contains an original final state;
    /// for every `a` in the alphabet, every `p` in `close(s)`, every
    /// original transition `(p, a, q)`, and every `q'` in `close(q)`, the
    /// result gets a transition `(s, a, q')`. This is the standard forward
    /// formulation: one closure table built up front, rather than
    /// recomputing a closure at every transition considered.
    ///
    /// Always valid: same states and alphabet as `self`.
    pub fn without_epsilon(&self) -> Automaton {
        debug_assert!(self.is_valid(), "without_epsilon requires a valid automaton");
        if !self.has_epsilon_transition() {
            return self.clone();
        }

        let closures: BTreeMap<StateId, _> =
            self.states().map(|s| (s, self.epsilon_closure(s))).collect();

        let mut result = Automaton::new();
        for symbol in self.alphabet() {
            result.add_symbol(symbol);
        }
        for s in self.states() {
            result.add_state(s);
            if self.is_state_initial(s) {
                result.set_state_initial(s);
            }
            if closures[&s].iter().any(|&p| self.is_state_final(p)) {
                result.set_state_final(s);
            }
        }
        for s in self.states() {
            for &p in &closures[&s] {
                for t in self.transitions_from(p) {
                    if t.symbol == EPSILON {
                        continue;
                    }
                    for &q_prime in &closures[&t.to] {
                        result.add_transition(s, t.symbol, q_prime);
                    }
                }
            }
        }
        result
    }
}
