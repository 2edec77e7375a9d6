//! Core engine types: colors, checkers, players, state, actions, RNG,
//! configuration and errors.
//!
//! Everything here is a plain value type; the board, dice, rules and game
//! modules build on top of it.

pub mod color;
pub mod checker;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use color::{Color, ColorMap};
pub use checker::Checker;
pub use player::{Player, PlayerError};
pub use rng::{FixedRolls, GameRng, GameRngState, RandomSource};
pub use config::{BarEntryRule, GameConfig};
pub use action::{Action, ActionRecord, Origin};
pub use state::{GameStatus, TurnState};
pub use error::{BoardError, DiceError, GameError, MoveError};
