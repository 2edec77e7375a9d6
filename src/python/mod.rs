//! Python bindings for the backgammon engine.
//!
//! Exposes `BackgammonGame` so a Python presentation layer can drive a
//! game without knowing any rules.
//!
//! # Quick Start
//!
//! ```python
//! import rust_backgammon as bg
//!
//! game = bg.BackgammonGame("Ana", "Bo", seed=7)
//! game.start_game()
//! first, second, forfeited = game.roll_dice()
//! for kind, origin, value in game.legal_actions():
//!     print(kind, origin, value)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_backgammon: a two-player backgammon rule engine.
#[pymodule]
fn rust_backgammon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBackgammonGame>()?;
    Ok(())
}
