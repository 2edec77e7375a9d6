//! Lifecycle and turn progression state.
//!
//! ## GameStatus
//!
//! The single tagged state guarding every mutating entry point:
//! `NotStarted` → `InProgress` → `Over`. `Over` is terminal until reset.
//!
//! ## TurnState
//!
//! Turn number plus per-turn counters (action sequence, checker moves made).

use serde::{Deserialize, Serialize};

/// Game lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

impl GameStatus {
    /// Check if play is allowed.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        self == GameStatus::InProgress
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        self == GameStatus::Over
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NotStarted => write!(f, "not started"),
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Over => write!(f, "over"),
        }
    }
}

/// Per-turn progression counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Turn number (starts at 1).
    pub number: u32,

    /// Action sequence within turn.
    pub sequence: u32,

    /// Checker moves (including re-entries and bear-offs) made this turn.
    pub moves_made: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// State at the start of a game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            number: 1,
            sequence: 0,
            moves_made: 0,
        }
    }

    /// Advance to next turn, clearing per-turn counters.
    pub fn advance(&mut self) {
        self.number += 1;
        self.sequence = 0;
        self.moves_made = 0;
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }

    /// Count a checker move.
    pub fn record_move(&mut self) {
        self.moves_made += 1;
    }

    /// True before any checker has moved this turn.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        self.moves_made == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(GameStatus::default(), GameStatus::NotStarted);
        assert!(!GameStatus::NotStarted.is_in_progress());
        assert!(GameStatus::InProgress.is_in_progress());
        assert!(GameStatus::Over.is_over());
    }

    #[test]
    fn test_turn_advance() {
        let mut turn = TurnState::new();
        turn.next_sequence();
        turn.record_move();
        assert!(!turn.is_first_move());

        turn.advance();

        assert_eq!(turn.number, 2);
        assert_eq!(turn.sequence, 0);
        assert!(turn.is_first_move());
    }

    #[test]
    fn test_next_sequence() {
        let mut turn = TurnState::new();
        assert_eq!(turn.next_sequence(), 0);
        assert_eq!(turn.next_sequence(), 1);
        assert_eq!(turn.sequence, 2);
    }
}
