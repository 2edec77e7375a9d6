//! Checker colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a backgammon game. A color fixes the direction its
//! checkers travel, its home range, and the range it re-enters through.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for bars, bear-off counts
//! and anything else the board keeps once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// One side of the board.
///
/// White moves toward decreasing point indices and bears off from 0–5.
/// Black moves toward increasing point indices and bears off from 18–23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Stable slot index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Points this color must occupy entirely before bearing off.
    #[must_use]
    pub fn home_range(self) -> RangeInclusive<u8> {
        match self {
            Color::White => 0..=5,
            Color::Black => 18..=23,
        }
    }

    /// Points a captured checker of this color re-enters through.
    ///
    /// This is always the opponent's home range.
    #[must_use]
    pub fn entry_range(self) -> RangeInclusive<u8> {
        self.opponent().home_range()
    }

    /// Check if a point lies in this color's home range.
    #[must_use]
    pub fn is_home(self, point: u8) -> bool {
        self.home_range().contains(&point)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Color, ColorMap};
///
/// let mut borne_off: ColorMap<u8> = ColorMap::with_value(0);
/// borne_off[Color::Black] += 1;
///
/// assert_eq!(borne_off[Color::White], 0);
/// assert_eq!(borne_off[Color::Black], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs, White first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
