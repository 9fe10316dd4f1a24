//! Two independent minimization procedures, useful as oracles for each
//! other: partition refinement and double-reversal.

pub mod brzozowski;
pub mod moore;
