//! Game lifecycle, turn flow and snapshots.

pub mod game;
pub mod snapshot;

pub use game::{Game, RollOutcome};
pub use snapshot::GameSnapshot;
