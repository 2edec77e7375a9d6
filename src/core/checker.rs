//! Checker tokens.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A single checker. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    color: Color,
}

impl Checker {
    /// Create a checker of the given color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// The checker's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Color::White => write!(f, "W"),
            Color::Black => write!(f, "B"),
        }
    }
}
