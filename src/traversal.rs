//! Forward and reverse reachability, and epsilon-closure, over an
//! [`Automaton`]. Every routine guards against cycles with an explicit
//! visited set rather than relying on recursion.

use std::collections::BTreeSet;

use crate::automaton::{Automaton, StateId, Symbol, EPSILON};

impl Automaton {
    /// The smallest set of states containing `start` and closed under
    /// successors of any symbol (including epsilon).
    pub fn forward_reachable(&self, start: StateId) -> BTreeSet<StateId> {
        self.forward_reachable_from(std::iter::once(start))
    }

    /// As [`Automaton::forward_reachable`], seeded from several states at
    /// once.
    pub fn forward_reachable_from(
        &self,
        starts: impl IntoIterator<Item = StateId>,
    ) -> BTreeSet<StateId> {
        let mut seen: BTreeSet<StateId> = starts.into_iter().collect();
        let mut worklist: Vec<StateId> = seen.iter().copied().collect();
        while let Some(s) = worklist.pop() {
            for t in self.transitions_from(s) {
                if seen.insert(t.to) {
                    worklist.push(t.to);
                }
            }
        }
        seen
    }

    /// The smallest set of states containing `target` and closed under
    /// predecessors of any symbol (including epsilon).
    pub fn backward_reachable(&self, target: StateId) -> BTreeSet<StateId> {
        self.backward_reachable_from(std::iter::once(target))
    }

    /// As [`Automaton::backward_reachable`], seeded from several states at
    /// once.
    pub fn backward_reachable_from(
        &self,
        targets: impl IntoIterator<Item = StateId>,
    ) -> BTreeSet<StateId> {
        let mut seen: BTreeSet<StateId> = targets.into_iter().collect();
        let mut worklist: Vec<StateId> = seen.iter().copied().collect();
        while let Some(s) = worklist.pop() {
            for t in self.transitions() {
                if t.to == s && seen.insert(t.from) {
                    worklist.push(t.from);
                }
            }
        }
        seen
    }

    /// True iff some final state is forward-reachable from `from`.
    pub fn can_reach_final(&self, from: StateId) -> bool {
        self.forward_reachable(from)
            .iter()
            .any(|&s| self.is_state_final(s))
    }

    /// The epsilon-closure of a single state: itself plus everything
    /// reachable through any chain of epsilon transitions. Self-loops on
    /// epsilon never cause re-expansion since the visited set blocks them.
    pub fn epsilon_closure(&self, start: StateId) -> BTreeSet<StateId> {
        self.epsilon_closure_of(std::iter::once(start))
    }

    /// As [`Automaton::epsilon_closure`], seeded from several states at
    /// once; this is the form used by word recognition, which closes a
    /// whole frontier at every step.
    pub fn epsilon_closure_of(&self, starts: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut seen: BTreeSet<StateId> = starts.into_iter().collect();
        let mut worklist: Vec<StateId> = seen.iter().copied().collect();
        while let Some(s) = worklist.pop() {
            for to in self.successors(s, EPSILON) {
                if to != s && seen.insert(to) {
                    worklist.push(to);
                }
            }
        }
        seen
    }

    /// Union of successors of every state in `from` on `symbol`.
    pub fn successors_of_set(
        &self,
        from: &BTreeSet<StateId>,
        symbol: Symbol,
    ) -> BTreeSet<StateId> {
        from.iter()
            .flat_map(|&s| self.successors(s, symbol))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_chain() -> Automaton {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        for s in 0..4 {
            a.add_state(s);
        }
        a.add_transition(0, b'a', 1);
        a.add_transition(1, b'a', 2);
        a.add_transition(2, b'a', 3);
        a.set_state_initial(0);
        a.set_state_final(3);
        a
    }

    #[test]
    fn forward_reachable_follows_chain() {
        let a = linear_chain();
        let r = a.forward_reachable(0);
        assert_eq!(r, BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(a.forward_reachable(2), BTreeSet::from([2, 3]));
    }

    #[test]
    fn backward_reachable_follows_chain_in_reverse() {
        let a = linear_chain();
        let r = a.backward_reachable(3);
        assert_eq!(r, BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(a.backward_reachable(0), BTreeSet::from([0]));
    }

    #[test]
    fn can_reach_final_checks_whole_forward_cone() {
        let a = linear_chain();
        assert!(a.can_reach_final(0));
        assert!(a.can_reach_final(3));
        let mut b = linear_chain();
        b.remove_state(3);
        assert!(!b.can_reach_final(0));
    }

    #[test]
    fn epsilon_closure_ignores_self_loops() {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_state(0);
        a.add_state(1);
        a.add_transition(0, EPSILON, 0);
        a.add_transition(0, EPSILON, 1);
        let closure = a.epsilon_closure(0);
        assert_eq!(closure, BTreeSet::from([0, 1]));
    }

    #[test]
    fn epsilon_closure_on_cycle_terminates() {
        let mut a = Automaton::new();
        a.add_symbol(b'a');
        a.add_state(0);
        a.add_state(1);
        a.add_transition(0, EPSILON, 1);
        a.add_transition(1, EPSILON, 0);
        assert_eq!(a.epsilon_closure(0), BTreeSet::from([0, 1]));
    }
}
