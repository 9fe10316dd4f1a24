//! Finite-state automata: construction, recognition, and
//! language-preserving transformations.
//!
//! The central type is [`Automaton`]: a set of printable-byte symbols, a
//! set of integer-identified states with initial/final flags, and a set of
//! labeled transitions between them. Primitive mutators
//! ([`Automaton::add_symbol`], [`Automaton::add_state`],
//! [`Automaton::add_transition`], and their removers) build one up; the
//! rest of this crate is traversal, structural predicates, word
//! recognition, and a family of algebraic builders
//! ([`Automaton::mirror`], [`Automaton::complete`],
//! [`Automaton::complement`], [`Automaton::without_epsilon`],
//! [`Automaton::product`]) and two minimization procedures
//! ([`Automaton::minimize_moore`], [`Automaton::minimize_brzozowski`])
//! that derive new, independent automata from existing ones.

pub mod automaton;
pub mod builders;
pub mod determinize;
pub mod display;
pub mod inclusion;
pub mod minimization;
pub mod predicates;
pub mod pruning;
pub mod recognition;
pub mod traversal;

pub use automaton::{Automaton, State, StateId, Symbol, Transition, EPSILON};
