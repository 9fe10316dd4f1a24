//! Language reversal.

use crate::automaton::Automaton;

impl Automaton {
    /// The automaton accepting the reverse of every word in `self`'s
    /// language: same alphabet, same states with initial/final swapped,
    /// and every transition `(p, a, q)` reversed to `(q, a, p)`. Always
    /// valid when `self` is valid — the state and symbol sets are
    /// untouched, so there is no stub path.
    pub fn mirror(&self) -> Automaton {
        debug_assert!(self.is_valid(), "mirror requires a valid automaton");
        let mut result = Automaton::new();
        for symbol in self.alphabet() {
            result.add_symbol(symbol);
        }
        for s in self.states() {
            result.add_state(s);
            if self.is_state_final(s) {
                result.set_state_initial(s);
            }
            if self.is_state_initial(s) {
                result.set_state_final(s);
            }
        }
        for t in self.transitions() {
            result.add_transition(t.to, t.symbol, t.from);
        }
        result
    }
}
