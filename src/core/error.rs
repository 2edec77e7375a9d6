//! Error taxonomy.
//!
//! - `GameError::InvalidState`: lifecycle misuse (roll before start, move after game over)
//! - `GameError::IllegalMove`: player input the rules reject; never mutates state
//! - `GameError::UnknownPlayer`: integration mistake (foreign player passed in)
//! - `GameError::InvalidPlayer`: construction-time validation
//!
//! All errors are returned synchronously from the call that detects them.

use super::color::Color;
use super::player::{Player, PlayerError};
use super::state::GameStatus;

/// Board container misuse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Point index outside 0..=23.
    InvalidPoint(u8),
    /// Tried to take a checker from an empty point.
    EmptyPoint(u8),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidPoint(p) => write!(f, "point {} is off the board", p),
            BoardError::EmptyPoint(p) => write!(f, "point {} is empty", p),
        }
    }
}

impl std::error::Error for BoardError {}

/// A random source produced an impossible die face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiceError {
    FaceOutOfRange(u8),
}

impl std::fmt::Display for DiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceError::FaceOutOfRange(v) => write!(f, "die face {} is outside 1..=6", v),
        }
    }
}

impl std::error::Error for DiceError {}

/// Why the move engine rejected an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Origin index outside 0..=23.
    InvalidPoint(u8),
    /// The mover has checkers on the bar and tried to move something else.
    MustEnterFromBar,
    /// No remaining die has this value.
    DieUnavailable(u8),
    /// Origin point holds no checkers.
    EmptyOrigin(u8),
    /// Origin point belongs to the other color.
    NotOwned { point: u8, owner: Color },
    /// Re-entry requested with an empty bar.
    NoCheckerOnBar,
    /// Destination would leave the board.
    OffBoard { origin: u8, die: u8 },
    /// Re-entry destination falls outside the entry quadrant.
    EntryOutOfRange { die: u8 },
    /// Destination holds two or more opposing checkers.
    Blocked(u8),
    /// Bar not empty or checkers remain outside home.
    BearOffNotAllowed(Color),
    /// Bear-off requested from a point outside the mover's home.
    NotInHome(u8),
    /// No remaining die covers the bear-off distance.
    NoSufficientDie { required: u8 },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidPoint(p) => write!(f, "point {} is off the board", p),
            MoveError::MustEnterFromBar => write!(f, "checkers on the bar must re-enter first"),
            MoveError::DieUnavailable(d) => write!(f, "die {} is not available", d),
            MoveError::EmptyOrigin(p) => write!(f, "point {} has no checkers", p),
            MoveError::NotOwned { point, owner } => {
                write!(f, "point {} belongs to {}", point, owner)
            }
            MoveError::NoCheckerOnBar => write!(f, "no checker on the bar to re-enter"),
            MoveError::OffBoard { origin, die } => {
                write!(f, "moving {} from point {} leaves the board", die, origin)
            }
            MoveError::EntryOutOfRange { die } => {
                write!(f, "die {} does not map to an entry point", die)
            }
            MoveError::Blocked(p) => write!(f, "point {} is blocked", p),
            MoveError::BearOffNotAllowed(c) => {
                write!(f, "{} cannot bear off until every checker is home", c)
            }
            MoveError::NotInHome(p) => write!(f, "point {} is not in the home board", p),
            MoveError::NoSufficientDie { required } => {
                write!(f, "bearing off needs a die of at least {}", required)
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::InvalidPoint(p) => MoveError::InvalidPoint(p),
            BoardError::EmptyPoint(p) => MoveError::EmptyOrigin(p),
        }
    }
}

/// Top-level engine error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The call is not allowed in the current lifecycle state.
    InvalidState(GameStatus),
    /// The rules rejected the action; nothing changed.
    IllegalMove(MoveError),
    /// The player is not registered in this game.
    UnknownPlayer(Player),
    /// Player construction failed.
    InvalidPlayer(PlayerError),
    /// Board container misuse.
    Board(BoardError),
    /// The random source misbehaved.
    Dice(DiceError),
    /// A snapshot could not be encoded or decoded.
    Snapshot(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidState(GameStatus::NotStarted) => {
                write!(f, "invalid game state: the game has not started")
            }
            GameError::InvalidState(GameStatus::Over) => {
                write!(f, "invalid game state: the game is already over")
            }
            GameError::InvalidState(status) => write!(f, "invalid game state: {}", status),
            GameError::IllegalMove(e) => write!(f, "illegal move: {}", e),
            GameError::UnknownPlayer(p) => write!(f, "{} is not part of this game", p),
            GameError::InvalidPlayer(e) => write!(f, "invalid player: {}", e),
            GameError::Board(e) => write!(f, "board error: {}", e),
            GameError::Dice(e) => write!(f, "dice error: {}", e),
            GameError::Snapshot(msg) => write!(f, "snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            GameError::InvalidPlayer(e) => Some(e),
            GameError::Board(e) => Some(e),
            GameError::Dice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        Self::IllegalMove(e)
    }
}

impl From<PlayerError> for GameError {
    fn from(e: PlayerError) -> Self {
        Self::InvalidPlayer(e)
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<DiceError> for GameError {
    fn from(e: DiceError) -> Self {
        Self::Dice(e)
    }
}

impl From<bincode::Error> for GameError {
    fn from(e: bincode::Error) -> Self {
        Self::Snapshot(e.to_string())
    }
}
