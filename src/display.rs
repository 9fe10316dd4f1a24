//! Human-readable pretty-printing.

use std::fmt;

use crate::automaton::Automaton;

/// Writes the pretty-print format: an "Initial states" header, a
/// "Final states" header, then one "For state N" section per state
/// listing its outgoing transitions as `--symbol--> target`.
pub(crate) fn write_pretty(a: &Automaton, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Initial states:")?;
    for s in a.initial_states() {
        writeln!(f, "\t{s}")?;
    }
    writeln!(f, "Final states:")?;
    for s in a.final_states() {
        writeln!(f, "\t{s}")?;
    }
    writeln!(f, "Transitions:")?;
    for s in a.states() {
        writeln!(f, "For state {s}:")?;
        for t in a.transitions_from(s) {
            let label = if t.symbol == crate::automaton::EPSILON {
                "epsilon".to_string()
            } else {
                (t.symbol as char).to_string()
            };
            writeln!(f, "\t\t--{label}--> {}", t.to)?;
        }
    }
    Ok(())
}
