//! Removing useless states while keeping the automaton valid.

use tracing::debug;

use crate::automaton::{Automaton, StateId};

/// The state id used by every validity-recovery stub that needs a fresh
/// initial state: `42`, matching the original reference implementation.
pub const STUB_STATE: StateId = 42;

/// The symbol used by the pruning and determinization stubs: `'q'`.
pub const PRUNING_STUB_SYMBOL: u8 = b'q';

/// Replaces `a` in place with the trivial valid automaton: one initial
/// state (`STUB_STATE`), no final states, and the single symbol `'q'`.
/// Used whenever pruning would otherwise leave the automaton invalid.
fn install_stub(a: &mut Automaton) {
    debug!("installing pruning validity stub");
    *a = Automaton::new();
    a.add_symbol(PRUNING_STUB_SYMBOL);
    a.add_state(STUB_STATE);
    a.set_state_initial(STUB_STATE);
}

impl Automaton {
    /// Deletes every state not forward-reachable from any initial state,
    /// and every transition incident to a deleted state. If this would
    /// leave the automaton invalid, installs the validity stub instead.
    pub fn remove_non_accessible_states(&self) -> Automaton {
        debug_assert!(self.is_valid(), "remove_non_accessible_states requires a valid automaton");
        let keep = self.forward_reachable_from(self.initial_states());
        self.restricted_to(&keep)
    }

    /// Deletes every state that cannot reach any final state, and every
    /// transition incident to a deleted state. If this would leave the
    /// automaton invalid, installs the validity stub instead.
    pub fn remove_non_co_accessible_states(&self) -> Automaton {
        debug_assert!(self.is_valid(), "remove_non_co_accessible_states requires a valid automaton");
        let keep = self.backward_reachable_from(self.final_states());
        self.restricted_to(&keep)
    }

    fn restricted_to(&self, keep: &std::collections::BTreeSet<StateId>) -> Automaton {
        let mut result = Automaton::new();
        for symbol in self.alphabet() {
            result.add_symbol(symbol);
        }
        for s in keep {
            result.add_state(*s);
            if self.is_state_initial(*s) {
                result.set_state_initial(*s);
            }
            if self.is_state_final(*s) {
                result.set_state_final(*s);
            }
        }
        for t in self.transitions() {
            if keep.contains(&t.from) && keep.contains(&t.to) {
                result.add_transition(t.from, t.symbol, t.to);
            }
        }
        if !result.is_valid() {
            install_stub(&mut result);
        }
        result
    }
}
