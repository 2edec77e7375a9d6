//! Game orchestration.
//!
//! `Game` owns the two players, the board, the dice and the lifecycle. It
//! is the only entry point a UI needs: every mutating call is guarded by the
//! `GameStatus`, rules are delegated to `MoveRuleEngine`, and every accepted
//! action is appended to the history.
//!
//! ## Turn flow
//!
//! ```text
//! start_game -> roll_dice -> attempt_move / attempt_bear_off ... -> end_turn
//!                  |                                                 ^
//!                  +-- all entry points blocked (forfeit) -----------+
//! ```
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::core::{FixedRolls, GameConfig, Origin};
//! use rust_backgammon::game::Game;
//!
//! let rolls = FixedRolls::new([(3, 1)]);
//! let mut game = Game::with_source("Ana", "Bo", GameConfig::default(), rolls).unwrap();
//! game.start_game();
//!
//! game.roll_dice().unwrap();
//! game.attempt_move(Origin::Point(7), 3).unwrap();
//! game.attempt_move(Origin::Point(5), 1).unwrap();
//! assert!(game.end_turn_if_exhausted().unwrap());
//! assert_eq!(game.current_player().name(), "Bo");
//! ```

use im::Vector;

use crate::board::{Board, BoardInitializer};
use crate::core::{
    Action, ActionRecord, Color, GameConfig, GameError, GameRng, GameStatus, Origin, Player,
    PlayerError, RandomSource, TurnState,
};
use crate::dice::Dice;
use crate::rules::{GameResult, MoveOutcome, MoveRuleEngine, WinReason};

/// Outcome of a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Raw faces in the order rolled.
    pub first: u8,
    pub second: u8,
    /// Set when no re-entry point was open and the turn passed.
    pub forfeited: bool,
}

impl RollOutcome {
    /// The raw pair.
    #[must_use]
    pub fn pair(&self) -> (u8, u8) {
        (self.first, self.second)
    }
}

/// A two-player backgammon game.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = GameRng> {
    pub(super) players: [Player; 2],
    pub(super) current: usize,
    pub(super) board: Board,
    pub(super) dice: Dice,
    pub(super) status: GameStatus,
    pub(super) result: Option<GameResult>,
    pub(super) turn: TurnState,
    pub(super) history: Vector<ActionRecord>,
    pub(super) engine: MoveRuleEngine,
    pub(super) config: GameConfig,
    pub(super) source: R,
}

impl Game<GameRng> {
    /// Create a game with a White and a Black player and a seeded RNG.
    ///
    /// White moves first.
    pub fn new(
        white: impl AsRef<str>,
        black: impl AsRef<str>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(white, black, config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with a White and a Black player and a custom dice source.
    pub fn with_source(
        white: impl AsRef<str>,
        black: impl AsRef<str>,
        config: GameConfig,
        source: R,
    ) -> Result<Self, GameError> {
        let white = Player::new(white, Color::White)?;
        let black = Player::new(black, Color::Black)?;
        Self::with_players(white, black, config, source)
    }

    /// Create a game from two players. `first` moves first.
    ///
    /// The players must have different colors.
    pub fn with_players(
        first: Player,
        second: Player,
        config: GameConfig,
        source: R,
    ) -> Result<Self, GameError> {
        if first.color() == second.color() {
            return Err(PlayerError::SameColor(first.color()).into());
        }
        Ok(Self {
            players: [first, second],
            current: 0,
            board: Board::new(),
            dice: Dice::new(),
            status: GameStatus::NotStarted,
            result: None,
            turn: TurnState::new(),
            history: Vector::new(),
            engine: MoveRuleEngine::new(config.bar_entry),
            config,
            source,
        })
    }

    // === Accessors ===

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.current]
    }

    /// Both players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player playing `color`.
    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        if self.players[0].color() == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current_player().color()
    }

    /// Seat index of the current player (0 or 1).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.result.as_ref().map(|r| &r.winner)
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Checkers `color` has borne off.
    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.board.borne_off(color)
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Accepted actions in order. Empty when history is disabled.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &MoveRuleEngine {
        &self.engine
    }

    /// The dice source.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Checker actions the current player may take now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if !self.status.is_in_progress() {
            return Vec::new();
        }
        self.engine
            .legal_actions(&self.board, &self.dice, self.current_color(), &self.turn)
    }

    /// Check if the current player may bear off.
    #[must_use]
    pub fn can_bear_off(&self) -> bool {
        MoveRuleEngine::can_bear_off(&self.board, self.current_color())
    }

    // === Lifecycle ===

    /// Set up the standard position and begin play with the first player.
    ///
    /// Clears any previous winner, history and turn counters.
    pub fn start_game(&mut self) {
        BoardInitializer::standard(&mut self.board);
        self.dice = Dice::new();
        self.current = 0;
        self.result = None;
        self.turn = TurnState::new();
        self.history = Vector::new();
        self.status = GameStatus::InProgress;
    }

    /// Return to `NotStarted` with an empty board.
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.dice = Dice::new();
        self.current = 0;
        self.result = None;
        self.turn = TurnState::new();
        self.history = Vector::new();
        self.status = GameStatus::NotStarted;
    }

    fn require_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::InvalidState(self.status))
        }
    }

    fn record(&mut self, action: Action) {
        if !self.config.record_history {
            return;
        }
        let sequence = self.turn.next_sequence();
        let record = ActionRecord::new(self.current_color(), action, self.turn.number, sequence);
        self.history.push_back(record);
    }

    fn pass_turn(&mut self) {
        self.dice.clear();
        self.current = 1 - self.current;
        self.turn.advance();
    }

    fn finish(&mut self, winner: Player, reason: WinReason) {
        self.result = Some(GameResult::new(winner, reason));
        self.status = GameStatus::Over;
    }

    // === Turn actions ===

    /// Roll the dice for the current player.
    ///
    /// If the player has checkers on the bar and every rolled value maps to a
    /// blocked entry point, the turn is forfeited and passes immediately.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, GameError> {
        self.require_in_progress()?;

        let (first, second) = self.dice.roll(&mut self.source)?;
        self.record(Action::Roll { first, second });

        let color = self.current_color();
        let forfeited = !MoveRuleEngine::reentry_possible(&self.board, &self.dice, color);
        if forfeited {
            self.record(Action::Forfeit);
            self.pass_turn();
        }

        Ok(RollOutcome {
            first,
            second,
            forfeited,
        })
    }

    /// Move one of the current player's checkers (or re-enter from the bar).
    pub fn attempt_move(
        &mut self,
        origin: impl Into<Origin>,
        die: u8,
    ) -> Result<MoveOutcome, GameError> {
        self.require_in_progress()?;
        let origin = origin.into();
        let color = self.current_color();

        let outcome = self.engine.attempt_move(
            &mut self.board,
            &mut self.dice,
            color,
            &self.turn,
            origin,
            die,
        )?;
        self.turn.record_move();
        self.record(Action::Move { origin, die });

        Ok(outcome)
    }

    /// Bear off a checker from `point`.
    ///
    /// The fifteenth checker borne off ends the game in the current player's
    /// favor.
    pub fn attempt_bear_off(&mut self, point: u8) -> Result<MoveOutcome, GameError> {
        self.require_in_progress()?;
        let color = self.current_color();

        let outcome = self
            .engine
            .attempt_bear_off(&mut self.board, &mut self.dice, color, point)?;
        self.turn.record_move();
        self.record(Action::BearOff { point });

        if outcome.is_win() {
            let winner = self.current_player().clone();
            self.finish(winner, WinReason::BearOff);
        }

        Ok(outcome)
    }

    /// End the current player's turn.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        self.record(Action::EndTurn);
        self.pass_turn();
        Ok(())
    }

    /// End the turn if the dice were rolled and every move has been used.
    ///
    /// Returns whether the turn ended.
    pub fn end_turn_if_exhausted(&mut self) -> Result<bool, GameError> {
        self.require_in_progress()?;
        if self.dice.last_roll().is_some() && !self.dice.has_moves_available() {
            self.end_turn()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// The current player concedes; the opponent wins.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        self.record(Action::Surrender);
        let winner = self.other_player().clone();
        self.finish(winner, WinReason::Surrender);
        Ok(())
    }

    /// Declare a winner and end the game.
    ///
    /// The player must be one of the two registered players.
    pub fn set_winner(&mut self, player: &Player) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::InvalidState(self.status));
        }
        if !self.players.contains(player) {
            return Err(GameError::UnknownPlayer(player.clone()));
        }
        self.finish(player.clone(), WinReason::Declared);
        Ok(())
    }
}

impl<R: RandomSource> std::fmt::Display for Game<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} vs {} [{}]", self.players[0], self.players[1], self.status)?;
        writeln!(f, "{}", self.board)?;
        match &self.result {
            Some(result) => write!(f, "{}", result),
            None => write!(
                f,
                "turn {}: {} to play, dice {}",
                self.turn.number,
                self.current_player().name(),
                self.dice
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRolls, MoveError};

    fn scripted(pairs: &[(u8, u8)]) -> Game<FixedRolls> {
        let rolls = FixedRolls::new(pairs.iter().copied());
        Game::with_source("Ana", "Bo", GameConfig::default(), rolls).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new("  Ana ", "Bo", GameConfig::default()).unwrap();

        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.current_player().name(), "Ana");
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.other_player().color(), Color::Black);
        assert_eq!(game.player(Color::Black).name(), "Bo");
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_invalid_players() {
        let err = Game::new("", "Bo", GameConfig::default()).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayer(PlayerError::EmptyName));

        let a = Player::new("A", Color::White).unwrap();
        let b = Player::new("B", Color::White).unwrap();
        let err = Game::with_players(a, b, GameConfig::default(), GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayer(PlayerError::SameColor(Color::White)));
    }

    #[test]
    fn test_guards_before_start() {
        let mut game = scripted(&[(3, 1)]);

        assert_eq!(
            game.roll_dice(),
            Err(GameError::InvalidState(GameStatus::NotStarted))
        );
        assert_eq!(game.end_turn(), Err(GameError::InvalidState(GameStatus::NotStarted)));
        assert_eq!(
            game.attempt_move(Origin::Point(7), 3),
            Err(GameError::InvalidState(GameStatus::NotStarted))
        );
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_roll_and_move() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();

        let roll = game.roll_dice().unwrap();
        assert_eq!(roll.pair(), (3, 1));
        assert!(!roll.forfeited);

        let outcome = game.attempt_move(7u8, 3).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { from: 7, to: 4, die: 3 });
        assert_eq!(game.dice().remaining(), &[1]);
        assert_eq!(game.turn().moves_made, 1);
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        game.roll_dice().unwrap();
        let before = game.board().clone();

        let err = game.attempt_move(Origin::Point(11), 3).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(MoveError::NotOwned {
                point: 11,
                owner: Color::Black
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.dice().moves_remaining(), 2);
    }

    #[test]
    fn test_end_turn_flips_player() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        game.roll_dice().unwrap();

        game.end_turn().unwrap();

        assert_eq!(game.current_color(), Color::Black);
        assert_eq!(game.turn().number, 2);
        assert_eq!(game.dice().last_roll(), None);
    }

    #[test]
    fn test_end_turn_if_exhausted() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        assert!(!game.end_turn_if_exhausted().unwrap());

        game.roll_dice().unwrap();
        game.attempt_move(7u8, 3).unwrap();
        assert!(!game.end_turn_if_exhausted().unwrap());

        game.attempt_move(5u8, 1).unwrap();
        assert!(game.end_turn_if_exhausted().unwrap());
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_surrender() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();

        game.surrender().unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.winner().map(Player::name), Some("Bo"));
        assert_eq!(game.result().map(|r| r.reason), Some(WinReason::Surrender));
        assert_eq!(game.roll_dice(), Err(GameError::InvalidState(GameStatus::Over)));
    }

    #[test]
    fn test_set_winner() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();

        let stranger = Player::new("Cy", Color::White).unwrap();
        assert_eq!(
            game.set_winner(&stranger),
            Err(GameError::UnknownPlayer(stranger.clone()))
        );
        assert!(!game.is_game_over());

        let bo = game.player(Color::Black).clone();
        game.set_winner(&bo).unwrap();
        assert_eq!(game.winner(), Some(&bo));
        assert_eq!(game.set_winner(&bo), Err(GameError::InvalidState(GameStatus::Over)));
    }

    #[test]
    fn test_reset_and_restart() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        game.surrender().unwrap();

        game.reset_game();
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.board(), &Board::new());
        assert!(game.winner().is_none());
        assert!(game.history().is_empty());

        game.start_game();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board().count_at(5), 5);
    }

    #[test]
    fn test_history_records() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        game.roll_dice().unwrap();
        game.attempt_move(7u8, 3).unwrap();
        game.end_turn().unwrap();

        let actions: Vec<Action> = game.history().iter().map(|r| r.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Roll { first: 3, second: 1 },
                Action::Move { origin: Origin::Point(7), die: 3 },
                Action::EndTurn,
            ]
        );
        assert!(game.history().iter().all(|r| r.turn == 1 && r.color == Color::White));
    }

    #[test]
    fn test_history_disabled() {
        let rolls = FixedRolls::new([(3, 1)]);
        let config = GameConfig::default().with_history(false);
        let mut game = Game::with_source("Ana", "Bo", config, rolls).unwrap();
        game.start_game();
        game.roll_dice().unwrap();

        assert!(game.history().is_empty());
    }

    #[test]
    fn test_display() {
        let mut game = scripted(&[(3, 1)]);
        game.start_game();
        let text = game.to_string();

        assert!(text.contains("Player(Ana, White) vs Player(Bo, Black)"));
        assert!(text.contains("turn 1: Ana to play, dice no roll"));
    }
}
