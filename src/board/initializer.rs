//! Starting layouts.

use crate::core::{BoardError, Checker, Color};

use super::board::Board;

/// Canonical starting position as (color, point, count).
///
/// Black: 2@0, 5@11, 3@16, 5@18. White: 2@23, 5@12, 3@7, 5@5.
/// Every point is on the board, so placing it cannot fail.
pub const STANDARD_LAYOUT: [(Color, u8, usize); 8] = [
    (Color::Black, 0, 2),
    (Color::Black, 11, 5),
    (Color::Black, 16, 3),
    (Color::Black, 18, 5),
    (Color::White, 23, 2),
    (Color::White, 12, 5),
    (Color::White, 7, 3),
    (Color::White, 5, 5),
];

/// Writes layouts into a board.
pub struct BoardInitializer;

impl BoardInitializer {
    /// Clear the board and set up the canonical starting position.
    pub fn standard(board: &mut Board) {
        board.reset();
        for &(color, point, count) in &STANDARD_LAYOUT {
            board.stack(point as usize, Checker::new(color), count);
        }
    }

    /// Clear the board and place checkers from a (color, point, count) list.
    ///
    /// Entries are applied in order, so listing the same point twice stacks
    /// checkers. Colors are not checked against each other: callers building
    /// custom positions are responsible for keeping points single-colored.
    pub fn from_layout(board: &mut Board, layout: &[(Color, u8, usize)]) -> Result<(), BoardError> {
        board.reset();
        for &(color, point, count) in layout {
            for _ in 0..count {
                board.add_checker(point, Checker::new(color))?;
            }
        }
        Ok(())
    }
}
