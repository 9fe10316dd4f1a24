//! Completion: making sure every `(state, symbol)` pair has a successor.

use std::collections::BTreeMap;

use tracing::debug;

use crate::automaton::{Automaton, StateId};

impl Automaton {
    /// Returns an automaton with the same language as `self` in which
    /// every `(state, symbol)` pair has at least one successor.
    ///
    /// If `self` is already complete, this is a structural copy. Otherwise
    /// a fresh sink state is allocated (the smallest non-negative id absent
    /// from the state set) and used for any missing transition out of a
    /// state that can still reach a final state. For a state from which no
    /// final state is reachable in `self` — so routing it to the sink or
    /// anywhere else can never make it accepting — the missing transitions
    /// are instead redirected to the state itself, which avoids growing the
    /// sink's in-degree for no semantic benefit. If every gap ends up
    /// self-redirected, the sink is never referenced and is dropped.
    ///
    /// Always produces a valid result: completion only ever adds states,
    /// and the alphabet is untouched, so a valid input guarantees a valid,
    /// complete output with no stub path.
    pub fn complete(&self) -> Automaton {
        debug_assert!(self.is_valid(), "complete requires a valid automaton");
        if self.is_complete() {
            return self.clone();
        }

        let mut result = self.clone();
        let sink = (0..=self.count_states() as StateId)
            .find(|id| !self.has_state(*id))
            .expect("pigeonhole: count_states()+1 candidate ids can't all be taken");

        let can_reach_final: BTreeMap<StateId, bool> = self
            .states()
            .map(|s| (s, self.can_reach_final(s)))
            .collect();

        let mut sink_used = false;
        for s in self.states() {
            for a in self.alphabet() {
                if self.successors(s, a).next().is_some() {
                    continue;
                }
                if can_reach_final[&s] {
                    if !result.has_state(sink) {
                        result.add_state(sink);
                    }
                    result.add_transition(s, a, sink);
                    sink_used = true;
                } else {
                    result.add_transition(s, a, s);
                }
            }
        }

        if sink_used {
            for a in self.alphabet() {
                result.add_transition(sink, a, sink);
            }
            debug!(sink, "completion added sink state");
        } else if result.has_state(sink) {
            result.remove_state(sink);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_is_noop_on_already_complete_automaton() {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_state(0);
        a.add_transition(0, b'a', 0);
        let c = a.complete();
        assert_eq!(c.count_states(), 1);
        assert!(c.is_complete());
    }

    #[test]
    fn complete_adds_sink_when_a_gap_can_still_reach_final() {
        // scenario 1 from the specification.
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_symbol(b'b');
        for s in 0..3 {
            a.add_state(s);
        }
        a.add_transition(0, b'a', 0);
        a.add_transition(0, b'b', 1);
        a.add_transition(0, b'b', 2);
        a.add_transition(1, b'a', 2);
        a.add_transition(2, b'b', 2);
        a.set_state_initial(0);
        a.set_state_final(2);

        let c = a.complete();
        assert!(c.is_complete());
        assert_eq!(c.count_states(), 4);
        assert!(c.matches(b"b"));
        assert!(!c.matches(b"a"));
    }

    #[test]
    fn complete_redirects_dead_state_to_itself_without_a_sink() {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_state(0);
        a.add_state(1);
        a.add_transition(0, b'a', 1);
        a.set_state_initial(0);
        // No final state anywhere: nothing can reach a final state, so
        // every gap self-loops and no sink is ever needed.
        let c = a.complete();
        assert!(c.is_complete());
        assert_eq!(c.count_states(), 2);
        assert!(c.has_transition(1, b'a', 1));
    }

    #[test]
    fn completion_preserves_language() {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_symbol(b'b');
        a.add_state(0);
        a.add_state(1);
        a.add_transition(0, b'a', 1);
        a.set_state_initial(0);
        a.set_state_final(1);
        let c = a.complete();
        for w in [&b""[..], b"a", b"b", b"ab", b"aa", b"ba"] {
            assert_eq!(a.matches(w), c.matches(w), "word {:?}", w);
        }
    }
}
