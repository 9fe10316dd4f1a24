//! Brzozowski double-reversal minimization.

use crate::automaton::Automaton;

impl Automaton {
    /// Minimizes `self` via `Complete(Determinize(Mirror(Determinize(Mirror(self)))))`.
    ///
    /// Both inner `determinize` calls feed on epsilon-free automata: the
    /// mirror of an epsilon-free automaton is itself epsilon-free, so the
    /// precondition on [`Automaton::determinize`] is never in question once
    /// `self` is. The result is a complete DFA accepting `L(self)`, minimal
    /// up to state renaming — a useful oracle to check
    /// [`Automaton::minimize_moore`] against, since the two arrive at the
    /// same state count by entirely different routes.
    pub fn minimize_brzozowski(&self) -> Automaton {
        debug_assert!(self.is_valid(), "minimize_brzozowski requires a valid automaton");
        debug_assert!(
            !self.has_epsilon_transition(),
            "minimize_brzozowski requires an epsilon-free automaton"
        );
        self.mirror()
            .determinize()
            .mirror()
            .determinize()
            .complete()
    }
}
