//! Language inclusion.

use crate::automaton::Automaton;

impl Automaton {
    /// True iff `L(self) ⊆ L(other)`, tested as
    /// `L(self) ∩ L(complement(other)) = ∅`.
    ///
    /// Before complementing, `other`'s alphabet is extended with every
    /// symbol in `self`'s alphabet it is missing (without adding any
    /// transitions for those symbols) so the complement's completion step
    /// covers them with a sink rather than silently excluding them from
    /// the product's shared alphabet.
    ///
    /// Requires both automata to be epsilon-free, matching the
    /// precondition on [`Automaton::complement`].
    pub fn is_included_in(&self, other: &Automaton) -> bool {
        debug_assert!(self.is_valid(), "is_included_in requires a valid left automaton");
        debug_assert!(other.is_valid(), "is_included_in requires a valid right automaton");

        let mut widened = other.clone();
        for symbol in self.alphabet() {
            if !widened.has_symbol(symbol) {
                widened.add_symbol(symbol);
            }
        }
        self.has_empty_intersection_with(&widened.complement())
    }
}
