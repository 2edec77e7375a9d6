//! Backgammon movement rules.
//!
//! `MoveRuleEngine` decides whether a checker action is legal and applies
//! it. The board and dice stay plain containers; all rule knowledge lives
//! here:
//! - Movement direction and destination arithmetic
//! - Blocking and capturing
//! - Forced bar entry and re-entry points
//! - Bear-off gating and die selection

pub mod engine;
pub mod result;

pub use engine::{MoveOutcome, MoveRuleEngine};
pub use result::{GameResult, WinReason};
