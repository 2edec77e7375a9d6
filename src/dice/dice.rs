//! Dice state for one turn.
//!
//! A roll of two different faces grants one move per face; a double grants
//! four moves of that face. Faces are never combined into a single longer
//! move: every checker move consumes exactly one entry of the remaining list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceError, RandomSource};

/// Last raw roll plus the moves still available this turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    last_roll: Option<(u8, u8)>,
    remaining: SmallVec<[u8; 4]>,
}

impl Dice {
    /// Dice with no roll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll both dice from a random source and set the available moves.
    ///
    /// Returns the raw pair in the order rolled. A face outside `1..=6`
    /// is rejected and leaves the dice unchanged.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> Result<(u8, u8), DiceError> {
        let (first, second) = source.roll_pair();
        self.set_roll(first, second)
    }

    /// Set the dice to a known roll.
    pub fn set_roll(&mut self, first: u8, second: u8) -> Result<(u8, u8), DiceError> {
        for face in [first, second] {
            if !(1..=6).contains(&face) {
                return Err(DiceError::FaceOutOfRange(face));
            }
        }
        self.last_roll = Some((first, second));
        self.remaining = Self::moves_for(first, second);
        Ok((first, second))
    }

    fn moves_for(first: u8, second: u8) -> SmallVec<[u8; 4]> {
        if first == second {
            SmallVec::from_slice(&[first; 4])
        } else {
            SmallVec::from_slice(&[first, second])
        }
    }

    /// The raw pair from the last roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<(u8, u8)> {
        self.last_roll
    }

    /// Moves still available, in roll order.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    /// True iff exactly four equal moves remain.
    ///
    /// This reads the remaining moves, not the raw roll, so it turns false
    /// as soon as one move of a double has been used. See `rolled_double`.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.remaining.len() == 4 && self.remaining.iter().all(|&m| m == self.remaining[0])
    }

    /// True iff the last raw roll showed two equal faces.
    #[must_use]
    pub fn rolled_double(&self) -> bool {
        matches!(self.last_roll, Some((a, b)) if a == b)
    }

    /// Number of moves left.
    #[must_use]
    pub fn moves_remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Check if any move is left.
    #[must_use]
    pub fn has_moves_available(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Check if a move of this value is available.
    #[must_use]
    pub fn has_move(&self, value: u8) -> bool {
        self.remaining.contains(&value)
    }

    /// Consume one move of this value.
    ///
    /// Returns false and changes nothing if the value is not available.
    pub fn use_move(&mut self, value: u8) -> bool {
        match self.remaining.iter().position(|&m| m == value) {
            Some(index) => {
                self.remaining.remove(index);
                true
            }
            None => false,
        }
    }

    /// Smallest remaining die that is at least `distance`.
    #[must_use]
    pub fn smallest_at_least(&self, distance: u8) -> Option<u8> {
        self.remaining.iter().copied().filter(|&m| m >= distance).min()
    }

    /// Remaining die values without repeats, ascending.
    #[must_use]
    pub fn distinct_remaining(&self) -> SmallVec<[u8; 4]> {
        let mut values = self.remaining.clone();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Forget the roll (end of turn).
    pub fn clear(&mut self) {
        self.last_roll = None;
        self.remaining.clear();
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last_roll {
            Some((a, b)) => write!(f, "{}-{} {:?}", a, b, self.remaining.as_slice()),
            None => write!(f, "no roll"),
        }
    }
}
