//! Dice semantics: rolls, doubles and the per-turn move list.

pub mod dice;

pub use dice::Dice;
