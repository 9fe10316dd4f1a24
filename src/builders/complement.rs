//! Complementation.

use crate::automaton::Automaton;

impl Automaton {
    /// The automaton accepting the complement of `self`'s language relative
    /// to its own alphabet: `Complete(Determinize(self))`, with every final
    /// flag inverted.
    ///
    /// Requires `self` to be epsilon-free — this is an unchecked
    /// precondition, matching [`Automaton::determinize`], which does not
    /// call [`Automaton::without_epsilon`] on its own behalf. Always valid:
    /// built from [`Automaton::complete`], which is always valid.
    pub fn complement(&self) -> Automaton {
        debug_assert!(self.is_valid(), "complement requires a valid automaton");
        debug_assert!(
            !self.has_epsilon_transition(),
            "complement requires an epsilon-free automaton"
        );
        let dfa = self.determinize().complete();
        let mut result = Automaton::new();
        for symbol in dfa.alphabet() {
            result.add_symbol(symbol);
        }
        for s in dfa.states() {
            result.add_state(s);
            if dfa.is_state_initial(s) {
                result.set_state_initial(s);
            }
            if !dfa.is_state_final(s) {
                result.set_state_final(s);
            }
        }
        for t in dfa.transitions() {
            result.add_transition(t.from, t.symbol, t.to);
        }
        result
    }
}
