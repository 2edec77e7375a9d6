//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Player};

/// How a game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner bore off all fifteen checkers.
    BearOff,
    /// The loser surrendered.
    Surrender,
    /// The winner was declared externally.
    Declared,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::BearOff => write!(f, "bore off all checkers"),
            WinReason::Surrender => write!(f, "opponent surrendered"),
            WinReason::Declared => write!(f, "declared winner"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: Player, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &Player) -> bool {
        self.winner == *player
    }

    /// Color of the winner.
    #[must_use]
    pub fn winning_color(&self) -> Color {
        self.winner.color()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins ({})", self.winner.name(), self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let ana = Player::new("Ana", Color::White).unwrap();
        let bo = Player::new("Bo", Color::Black).unwrap();
        let result = GameResult::new(ana.clone(), WinReason::BearOff);

        assert!(result.is_winner(&ana));
        assert!(!result.is_winner(&bo));
        assert_eq!(result.winning_color(), Color::White);
        assert_eq!(result.to_string(), "Ana wins (bore off all checkers)");
    }
}
