//! Game bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::board::POINT_COUNT;
use crate::core::{Action, BarEntryRule, Color, GameConfig, GameError, GameRng, Origin};
use crate::game::{Game, GameSnapshot};
use crate::rules::MoveOutcome;

fn to_py_err(e: GameError) -> PyErr {
    match e {
        GameError::InvalidState(_) => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn parse_color(name: &str) -> PyResult<Color> {
    match name.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(PyValueError::new_err(format!("unknown color '{}'", other))),
    }
}

fn outcome_dict(py: Python<'_>, outcome: MoveOutcome) -> PyResult<PyObject> {
    let dict = pyo3::types::PyDict::new_bound(py);
    dict.set_item("die", outcome.die())?;
    dict.set_item("captured", outcome.captured())?;
    dict.set_item("win", outcome.is_win())?;
    dict.set_item("text", outcome.to_string())?;
    Ok(dict.into_any().unbind())
}

/// Python wrapper for `Game`.
///
/// Actions are reported as `(kind, origin, value)` tuples:
/// `("move", point or None for the bar, die)` and `("bear_off", point, 0)`.
#[pyclass(name = "BackgammonGame")]
pub struct PyBackgammonGame {
    game: Game<GameRng>,
}

#[pymethods]
impl PyBackgammonGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - white: Name of the White player (moves first)
    /// - black: Name of the Black player
    /// - seed: RNG seed for deterministic dice
    /// - strict_bar_entry: Require every action to come from the bar while
    ///   checkers are on it, not just the first
    #[new]
    #[pyo3(signature = (white = "White", black = "Black", seed = 42, strict_bar_entry = false))]
    fn new(white: &str, black: &str, seed: u64, strict_bar_entry: bool) -> PyResult<Self> {
        let bar_entry = if strict_bar_entry {
            BarEntryRule::EveryAction
        } else {
            BarEntryRule::FirstAction
        };
        let config = GameConfig::default().with_seed(seed).with_bar_entry(bar_entry);
        let game = Game::new(white, black, config).map_err(to_py_err)?;
        Ok(Self { game })
    }

    fn start_game(&mut self) {
        self.game.start_game();
    }

    fn reset_game(&mut self) {
        self.game.reset_game();
    }

    /// Roll the dice. Returns `(first, second, forfeited)`.
    ///
    /// `forfeited` is true when no entry point was open for a checker on
    /// the bar; the turn has then already passed to the opponent.
    fn roll_dice(&mut self) -> PyResult<(u8, u8, bool)> {
        self.game
            .roll_dice()
            .map(|r| (r.first, r.second, r.forfeited))
            .map_err(to_py_err)
    }

    /// Move a checker from `point` by `die`.
    fn move_checker(&mut self, py: Python<'_>, point: u8, die: u8) -> PyResult<PyObject> {
        let outcome = self.game.attempt_move(Origin::Point(point), die).map_err(to_py_err)?;
        outcome_dict(py, outcome)
    }

    /// Re-enter a checker from the bar with `die`.
    fn enter_from_bar(&mut self, py: Python<'_>, die: u8) -> PyResult<PyObject> {
        let outcome = self.game.attempt_move(Origin::Bar, die).map_err(to_py_err)?;
        outcome_dict(py, outcome)
    }

    /// Bear off a checker from `point`.
    fn bear_off(&mut self, py: Python<'_>, point: u8) -> PyResult<PyObject> {
        let outcome = self.game.attempt_bear_off(point).map_err(to_py_err)?;
        outcome_dict(py, outcome)
    }

    fn end_turn(&mut self) -> PyResult<()> {
        self.game.end_turn().map_err(to_py_err)
    }

    /// End the turn if every rolled move has been used.
    fn end_turn_if_exhausted(&mut self) -> PyResult<bool> {
        self.game.end_turn_if_exhausted().map_err(to_py_err)
    }

    fn surrender(&mut self) -> PyResult<()> {
        self.game.surrender().map_err(to_py_err)
    }

    /// Declare the player of `color` the winner.
    fn set_winner(&mut self, color: &str) -> PyResult<()> {
        let player = self.game.player(parse_color(color)?).clone();
        self.game.set_winner(&player).map_err(to_py_err)
    }

    /// Legal checker actions for the current player.
    fn legal_actions(&self) -> Vec<(String, Option<u8>, u8)> {
        self.game
            .legal_actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Move { origin: Origin::Bar, die } => Some(("move".to_string(), None, die)),
                Action::Move { origin: Origin::Point(p), die } => {
                    Some(("move".to_string(), Some(p), die))
                }
                Action::BearOff { point } => Some(("bear_off".to_string(), Some(point), 0)),
                _ => None,
            })
            .collect()
    }

    /// Signed checker counts for points 0..=23 (White positive, Black negative).
    #[getter]
    fn points(&self) -> Vec<i32> {
        let board = self.game.board();
        (0..POINT_COUNT as u8).map(|p| board.signed_count(p)).collect()
    }

    fn bar_count(&self, color: &str) -> PyResult<usize> {
        Ok(self.game.board().bar_count(parse_color(color)?))
    }

    fn borne_off(&self, color: &str) -> PyResult<u8> {
        Ok(self.game.borne_off(parse_color(color)?))
    }

    /// Remaining die values.
    #[getter]
    fn dice(&self) -> Vec<u8> {
        self.game.dice().remaining().to_vec()
    }

    #[getter]
    fn last_roll(&self) -> Option<(u8, u8)> {
        self.game.dice().last_roll()
    }

    #[getter]
    fn current_player(&self) -> String {
        self.game.current_player().name().to_string()
    }

    #[getter]
    fn current_color(&self) -> String {
        self.game.current_color().to_string()
    }

    #[getter]
    fn status(&self) -> String {
        self.game.status().to_string()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        self.game.winner().map(|p| p.name().to_string())
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.game.turn().number
    }

    /// Action history as display strings.
    fn history(&self) -> Vec<String> {
        self.game.history().iter().map(ToString::to_string).collect()
    }

    /// Encode the game (without its RNG position) to bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.game.snapshot().encode().map_err(to_py_err)
    }

    /// Restore a game from `snapshot` bytes, rolling future dice from `seed`.
    #[staticmethod]
    #[pyo3(signature = (data, seed = 42))]
    fn restore(data: Vec<u8>, seed: u64) -> PyResult<Self> {
        let snapshot = GameSnapshot::decode(&data).map_err(to_py_err)?;
        let game = Game::restore(snapshot, GameRng::new(seed)).map_err(to_py_err)?;
        Ok(Self { game })
    }

    fn __str__(&self) -> String {
        self.game.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BackgammonGame(turn={}, current={}, status={})",
            self.game.turn().number,
            self.game.current_color(),
            self.game.status()
        )
    }
}
