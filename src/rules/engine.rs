//! Move legality and execution.
//!
//! `MoveRuleEngine` owns every backgammon movement rule:
//! - Normal moves (White toward 0, Black toward 23)
//! - Captures of a single opposing checker
//! - Re-entry from the bar through the opponent's home quadrant
//! - Bearing off once every checker is home
//!
//! Each request is validated completely before anything is touched, so a
//! rejected request leaves the board and dice exactly as they were.
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::board::{Board, BoardInitializer};
//! use rust_backgammon::core::{Color, Origin, TurnState};
//! use rust_backgammon::dice::Dice;
//! use rust_backgammon::rules::{MoveOutcome, MoveRuleEngine};
//!
//! let mut board = Board::new();
//! BoardInitializer::standard(&mut board);
//! let mut dice = Dice::new();
//! dice.set_roll(3, 1).unwrap();
//!
//! let engine = MoveRuleEngine::default();
//! let outcome = engine
//!     .attempt_move(&mut board, &mut dice, Color::White, &TurnState::new(), Origin::Point(7), 3)
//!     .unwrap();
//!
//! assert_eq!(outcome, MoveOutcome::Moved { from: 7, to: 4, die: 3 });
//! assert_eq!(dice.remaining(), &[1]);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, CHECKERS_PER_COLOR, POINT_COUNT};
use crate::core::{Action, BarEntryRule, Color, MoveError, Origin, TurnState};
use crate::dice::Dice;

/// What an accepted checker action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A checker moved to an empty or friendly point.
    Moved { from: u8, to: u8, die: u8 },
    /// A checker moved onto a single opposing checker and sent it to the bar.
    Captured { from: u8, to: u8, die: u8 },
    /// A checker re-entered from the bar.
    Entered { to: u8, die: u8, captured: bool },
    /// A checker was borne off. `win` is set when it was the fifteenth.
    BorneOff { from: u8, die: u8, win: bool },
}

impl MoveOutcome {
    /// The die value consumed.
    #[must_use]
    pub fn die(&self) -> u8 {
        match *self {
            MoveOutcome::Moved { die, .. }
            | MoveOutcome::Captured { die, .. }
            | MoveOutcome::Entered { die, .. }
            | MoveOutcome::BorneOff { die, .. } => die,
        }
    }

    /// Check if an opposing checker was sent to the bar.
    #[must_use]
    pub fn captured(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Captured { .. } | MoveOutcome::Entered { captured: true, .. }
        )
    }

    /// Check if this action won the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::BorneOff { win: true, .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved { from, to, die } => write!(f, "{} -> {} ({})", from, to, die),
            MoveOutcome::Captured { from, to, die } => {
                write!(f, "{} -> {} ({}), hit", from, to, die)
            }
            MoveOutcome::Entered { to, die, captured } => {
                write!(f, "bar -> {} ({})", to, die)?;
                if *captured {
                    write!(f, ", hit")?;
                }
                Ok(())
            }
            MoveOutcome::BorneOff { from, die, win } => {
                write!(f, "{} -> off ({})", from, die)?;
                if *win {
                    write!(f, ", game won")?;
                }
                Ok(())
            }
        }
    }
}

/// A validated move, ready to commit.
#[derive(Clone, Copy, Debug)]
struct Plan {
    origin: Origin,
    to: u8,
    die: u8,
    capture: bool,
}

/// The rule engine.
///
/// Stateless apart from configuration; the same engine can serve any number
/// of boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRuleEngine {
    bar_entry: BarEntryRule,
}

impl MoveRuleEngine {
    /// Create an engine with the given bar-entry enforcement.
    #[must_use]
    pub fn new(bar_entry: BarEntryRule) -> Self {
        Self { bar_entry }
    }

    /// The configured bar-entry enforcement.
    #[must_use]
    pub fn bar_entry(&self) -> BarEntryRule {
        self.bar_entry
    }

    // === Arithmetic ===

    /// Destination of a normal move, or `None` if it leaves the board.
    #[must_use]
    pub fn destination(origin: u8, die: u8, color: Color) -> Option<u8> {
        let to = match color {
            Color::White => origin as i16 - die as i16,
            Color::Black => origin as i16 + die as i16,
        };
        (0..POINT_COUNT as i16).contains(&to).then_some(to as u8)
    }

    /// Re-entry point for a die, or `None` if it falls outside the entry quadrant.
    ///
    /// White enters at `24 - die` (18..=23), Black at `die - 1` (0..=5).
    #[must_use]
    pub fn entry_point(die: u8, color: Color) -> Option<u8> {
        let to = match color {
            Color::White => 24 - die as i16,
            Color::Black => die as i16 - 1,
        };
        (to >= 0 && color.entry_range().contains(&(to as u8))).then_some(to as u8)
    }

    /// Pips needed to bear a checker off from `point`, or `None` if the
    /// point is outside the color's home.
    ///
    /// White: `point + 1`. Black: `24 - point`.
    #[must_use]
    pub fn bear_off_distance(point: u8, color: Color) -> Option<u8> {
        if !color.is_home(point) {
            return None;
        }
        Some(match color {
            Color::White => point + 1,
            Color::Black => 24 - point,
        })
    }

    // === Board predicates ===

    /// Check if a point holds two or more checkers opposing `color`.
    #[must_use]
    pub fn is_blocked(board: &Board, point: u8, color: Color) -> bool {
        board.color_at(point) == Some(color.opponent()) && board.count_at(point) >= 2
    }

    /// Check if `color` may bear off: empty bar and every checker home.
    #[must_use]
    pub fn can_bear_off(board: &Board, color: Color) -> bool {
        board.is_bar_empty(color) && board.checkers_outside_home(color) == 0
    }

    /// Check if some remaining die maps to an open entry point.
    ///
    /// Trivially true when the bar is empty.
    #[must_use]
    pub fn reentry_possible(board: &Board, dice: &Dice, color: Color) -> bool {
        if board.is_bar_empty(color) {
            return true;
        }
        dice.remaining().iter().any(|&die| {
            Self::entry_point(die, color).is_some_and(|to| !Self::is_blocked(board, to, color))
        })
    }

    /// Check if the next checker action of `color` must come from the bar.
    #[must_use]
    pub fn must_enter_from_bar(&self, board: &Board, color: Color, turn: &TurnState) -> bool {
        if board.is_bar_empty(color) {
            return false;
        }
        match self.bar_entry {
            BarEntryRule::FirstAction => turn.is_first_move(),
            BarEntryRule::EveryAction => true,
        }
    }

    // === Validation ===

    fn plan_move(
        &self,
        board: &Board,
        dice: &Dice,
        color: Color,
        turn: &TurnState,
        origin: Origin,
        die: u8,
    ) -> Result<Plan, MoveError> {
        if origin != Origin::Bar && self.must_enter_from_bar(board, color, turn) {
            return Err(MoveError::MustEnterFromBar);
        }
        if !dice.has_move(die) {
            return Err(MoveError::DieUnavailable(die));
        }

        let to = match origin {
            Origin::Bar => {
                if board.is_bar_empty(color) {
                    return Err(MoveError::NoCheckerOnBar);
                }
                Self::entry_point(die, color).ok_or(MoveError::EntryOutOfRange { die })?
            }
            Origin::Point(from) => {
                if from as usize >= POINT_COUNT {
                    return Err(MoveError::InvalidPoint(from));
                }
                match board.color_at(from) {
                    None => return Err(MoveError::EmptyOrigin(from)),
                    Some(owner) if owner != color => {
                        return Err(MoveError::NotOwned { point: from, owner })
                    }
                    Some(_) => {}
                }
                Self::destination(from, die, color).ok_or(MoveError::OffBoard { origin: from, die })?
            }
        };

        if Self::is_blocked(board, to, color) {
            return Err(MoveError::Blocked(to));
        }
        let capture = board.color_at(to) == Some(color.opponent());

        Ok(Plan {
            origin,
            to,
            die,
            capture,
        })
    }

    fn plan_bear_off(
        &self,
        board: &Board,
        dice: &Dice,
        color: Color,
        point: u8,
    ) -> Result<u8, MoveError> {
        if point as usize >= POINT_COUNT {
            return Err(MoveError::InvalidPoint(point));
        }
        if !Self::can_bear_off(board, color) {
            return Err(MoveError::BearOffNotAllowed(color));
        }
        match board.color_at(point) {
            None => return Err(MoveError::EmptyOrigin(point)),
            Some(owner) if owner != color => return Err(MoveError::NotOwned { point, owner }),
            Some(_) => {}
        }
        let required =
            Self::bear_off_distance(point, color).ok_or(MoveError::NotInHome(point))?;
        dice.smallest_at_least(required)
            .ok_or(MoveError::NoSufficientDie { required })
    }

    // === Execution ===

    /// Move a checker from a point, or re-enter one from the bar, using `die`.
    ///
    /// On success the board reflects the move (including any capture) and
    /// one instance of `die` has been consumed. On error nothing changes.
    pub fn attempt_move(
        &self,
        board: &mut Board,
        dice: &mut Dice,
        color: Color,
        turn: &TurnState,
        origin: Origin,
        die: u8,
    ) -> Result<MoveOutcome, MoveError> {
        let plan = self.plan_move(board, dice, color, turn, origin, die)?;

        let checker = match plan.origin {
            Origin::Bar => board.remove_from_bar(color).ok_or(MoveError::NoCheckerOnBar)?,
            Origin::Point(from) => board.remove_top_checker(from)?,
        };
        if plan.capture {
            let hit = board.remove_top_checker(plan.to)?;
            board.add_to_bar(hit);
        }
        board.add_checker(plan.to, checker)?;
        dice.use_move(plan.die);

        Ok(match plan.origin {
            Origin::Bar => MoveOutcome::Entered {
                to: plan.to,
                die: plan.die,
                captured: plan.capture,
            },
            Origin::Point(from) if plan.capture => MoveOutcome::Captured {
                from,
                to: plan.to,
                die: plan.die,
            },
            Origin::Point(from) => MoveOutcome::Moved {
                from,
                to: plan.to,
                die: plan.die,
            },
        })
    }

    /// Bear off the top checker of `point`.
    ///
    /// Uses the smallest remaining die that covers the distance. On error
    /// nothing changes.
    pub fn attempt_bear_off(
        &self,
        board: &mut Board,
        dice: &mut Dice,
        color: Color,
        point: u8,
    ) -> Result<MoveOutcome, MoveError> {
        let die = self.plan_bear_off(board, dice, color, point)?;

        board.bear_off(point)?;
        dice.use_move(die);

        Ok(MoveOutcome::BorneOff {
            from: point,
            die,
            win: board.borne_off(color) as usize == CHECKERS_PER_COLOR,
        })
    }

    // === Enumeration ===

    /// Every single checker action `color` could take right now.
    ///
    /// Each distinct die value is tried once per origin. Bear-offs are listed
    /// by point; the engine picks the die when one is played.
    #[must_use]
    pub fn legal_actions(&self, board: &Board, dice: &Dice, color: Color, turn: &TurnState) -> Vec<Action> {
        let mut actions = Vec::new();
        if !dice.has_moves_available() {
            return actions;
        }

        let origins: Vec<Origin> = std::iter::once(Origin::Bar)
            .chain(board.points_of(color).map(Origin::Point))
            .collect();

        for die in dice.distinct_remaining() {
            for &origin in &origins {
                if self.plan_move(board, dice, color, turn, origin, die).is_ok() {
                    actions.push(Action::Move { origin, die });
                }
            }
        }

        if Self::can_bear_off(board, color) {
            for point in board.points_of(color) {
                if self.plan_bear_off(board, dice, color, point).is_ok() {
                    actions.push(Action::BearOff { point });
                }
            }
        }

        actions
    }
}
