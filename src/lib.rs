//! # rust-backgammon
//!
//! A two-player backgammon rule engine with deterministic, injectable dice.
//!
//! ## Design Principles
//!
//! 1. **One Rule Engine**: Every legality decision lives in `MoveRuleEngine`.
//!    UIs never branch on rules; they call `Game` and re-read state.
//!
//! 2. **Atomic Actions**: A rejected move leaves the board and dice exactly
//!    as they were. Rejections carry a typed reason.
//!
//! 3. **Deterministic Dice**: Dice come from a `RandomSource`. The default
//!    `GameRng` is seeded ChaCha8; `FixedRolls` scripts rolls for tests and
//!    replays.
//!
//! ## Architecture
//!
//! - **Board as Container**: 24 point stacks, two bars, two bear-off counters.
//!   No rules.
//!
//! - **Lifecycle Guard**: A single `GameStatus` (`NotStarted`, `InProgress`,
//!   `Over`) gates every mutating call.
//!
//! - **Persistent History**: Accepted actions are kept in an `im::Vector`,
//!   so cloning a game for analysis is cheap.
//!
//! ## Modules
//!
//! - `core`: Colors, checkers, players, actions, RNG, configuration, errors
//! - `board`: Board container and starting layouts
//! - `dice`: Rolls and the per-turn move list
//! - `rules`: Move legality, execution and game results
//! - `game`: Lifecycle, turn flow and snapshots

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Checker, Player, PlayerError,
    RandomSource, GameRng, GameRngState, FixedRolls,
    BarEntryRule, GameConfig,
    Action, ActionRecord, Origin,
    GameStatus, TurnState,
    BoardError, DiceError, GameError, MoveError,
};

pub use crate::board::{Board, BoardInitializer, Point, CHECKERS_PER_COLOR, POINT_COUNT, STANDARD_LAYOUT};

pub use crate::dice::Dice;

pub use crate::rules::{GameResult, MoveOutcome, MoveRuleEngine, WinReason};

pub use crate::game::{Game, GameSnapshot, RollOutcome};
