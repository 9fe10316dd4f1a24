//! Structural predicates: determinism, completeness, epsilon-bearing-ness,
//! and language emptiness. Every predicate here requires a valid input as a
//! precondition, checked with [`debug_assert!`] — the Rust analogue of the
//! original C++ `assert()`, compiled out in release builds.

use crate::automaton::{Automaton, EPSILON};

impl Automaton {
    /// True iff any transition is labeled epsilon.
    pub fn has_epsilon_transition(&self) -> bool {
        debug_assert!(self.is_valid(), "has_epsilon_transition requires a valid automaton");
        self.transitions().any(|t| t.symbol == EPSILON)
    }

    /// A deterministic automaton has no epsilon transitions, exactly one
    /// initial state, and at most one successor per `(state, symbol)` pair.
    pub fn is_deterministic(&self) -> bool {
        debug_assert!(self.is_valid(), "is_deterministic requires a valid automaton");
        if self.has_epsilon_transition() {
            return false;
        }
        if self.initial_states().count() != 1 {
            return false;
        }
        for s in self.states() {
            for a in self.alphabet() {
                if self.successors(s, a).count() > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// A complete automaton has at least one successor for every
    /// `(state, symbol)` pair.
    pub fn is_complete(&self) -> bool {
        debug_assert!(self.is_valid(), "is_complete requires a valid automaton");
        self.states()
            .all(|s| self.alphabet().all(|a| self.successors(s, a).next().is_some()))
    }

    /// True iff the accepted language is empty: no final state is
    /// forward-reachable from any initial state. Vacuously true if there
    /// are no initial states or no final states at all.
    pub fn is_language_empty(&self) -> bool {
        debug_assert!(self.is_valid(), "is_language_empty requires a valid automaton");
        if self.initial_states().next().is_none() || self.final_states().next().is_none() {
            return true;
        }
        let reachable = self.forward_reachable_from(self.initial_states());
        !reachable.iter().any(|&s| self.is_state_final(s))
    }
}
