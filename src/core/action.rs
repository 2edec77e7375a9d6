//! Action representation and history records.
//!
//! Checker actions name a source and a die:
//! - "Move from 12 with a 5" = `Action::Move { origin: Origin::Point(12), die: 5 }`
//! - "Enter from the bar with a 3" = `Action::Move { origin: Origin::Bar, die: 3 }`
//! - "Bear off from 2" = `Action::BearOff { point: 2 }` (the engine picks the die)
//!
//! Turn-level actions (roll, end turn, forfeit, surrender) exist so the game
//! can record a complete history.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Where a moving checker comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// The mover's bar (re-entry).
    Bar,
    /// A board point (0..=23).
    Point(u8),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Bar => write!(f, "bar"),
            Origin::Point(p) => write!(f, "point {}", p),
        }
    }
}

impl From<u8> for Origin {
    fn from(point: u8) -> Self {
        Origin::Point(point)
    }
}

/// A game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Dice were rolled.
    Roll { first: u8, second: u8 },
    /// Move a checker (or re-enter one) using one die.
    Move { origin: Origin, die: u8 },
    /// Bear a checker off from a home point.
    BearOff { point: u8 },
    /// The player finished the turn.
    EndTurn,
    /// The turn was lost because no re-entry point was open.
    Forfeit,
    /// The player conceded.
    Surrender,
}

impl Action {
    /// Check if this action moves a checker.
    #[must_use]
    pub fn is_checker_action(&self) -> bool {
        matches!(self, Action::Move { .. } | Action::BearOff { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll { first, second } => write!(f, "roll {}-{}", first, second),
            Action::Move { origin, die } => write!(f, "move {} by {}", origin, die),
            Action::BearOff { point } => write!(f, "bear off point {}", point),
            Action::EndTurn => write!(f, "end turn"),
            Action::Forfeit => write!(f, "forfeit turn"),
            Action::Surrender => write!(f, "surrender"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Rendering a move log in a UI
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that acted.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(color: Color, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            color,
            action,
            turn,
            sequence,
        }
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}.{}] {}: {}", self.turn, self.sequence, self.color, self.action)
    }
}
