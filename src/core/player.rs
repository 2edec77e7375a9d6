//! Player identity.
//!
//! A `Player` is a validated, immutable (name, color) pair. Names are trimmed
//! at construction and must not be empty. Equality compares both fields.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Validation failure while constructing players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerError {
    /// The name was empty or only whitespace.
    EmptyName,
    /// Both players of a game were given the same color.
    SameColor(Color),
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::EmptyName => write!(f, "player name must not be empty"),
            PlayerError::SameColor(color) => {
                write!(f, "both players cannot play {}", color)
            }
        }
    }
}

impl std::error::Error for PlayerError {}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Create a player, trimming surrounding whitespace from the name.
    ///
    /// ```
    /// use rust_backgammon::core::{Color, Player};
    ///
    /// let player = Player::new("  Ana ", Color::White).unwrap();
    /// assert_eq!(player.name(), "Ana");
    /// assert!(Player::new("   ", Color::Black).is_err());
    /// ```
    pub fn new(name: impl AsRef<str>, color: Color) -> Result<Self, PlayerError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            color,
        })
    }

    /// The trimmed player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color this player moves.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({}, {})", self.name, self.color)
    }
}
