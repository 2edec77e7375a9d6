//! Board container and starting layouts.
//!
//! `Board` is a pure container: 24 point stacks, two bars, two bear-off
//! counters. Legality is decided elsewhere (`rules`).

pub mod board;
pub mod initializer;

pub use board::{Board, Point, CHECKERS_PER_COLOR, POINT_COUNT};
pub use initializer::{BoardInitializer, STANDARD_LAYOUT};
