//! Game snapshots.
//!
//! A `GameSnapshot` is a plain serde value holding everything a `Game`
//! needs except its dice source. Snapshots encode to compact bytes with
//! `bincode` and can be restored against any `RandomSource`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, CHECKERS_PER_COLOR};
use crate::core::{
    ActionRecord, Color, GameConfig, GameError, GameStatus, Player, PlayerError, RandomSource, TurnState,
};
use crate::dice::Dice;
use crate::rules::{GameResult, MoveRuleEngine};

use super::game::Game;

/// Serializable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: [Player; 2],
    pub current: usize,
    pub board: Board,
    pub dice: Dice,
    pub status: GameStatus,
    pub result: Option<GameResult>,
    pub turn: TurnState,
    pub history: Vector<ActionRecord>,
    pub config: GameConfig,
}

impl GameSnapshot {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.players[0].color() == self.players[1].color() {
            return Err(PlayerError::SameColor(self.players[0].color()).into());
        }
        if self.current > 1 {
            return Err(GameError::Snapshot(format!("current player index {} out of range", self.current)));
        }
        if let Some(point) = self.board.mixed_point() {
            return Err(GameError::Snapshot(format!("point {} holds both colors", point)));
        }
        if self.status != GameStatus::NotStarted {
            for color in Color::ALL {
                let total = self.board.total_checkers(color);
                if total != CHECKERS_PER_COLOR {
                    return Err(GameError::Snapshot(format!("{} has {} checkers", color, total)));
                }
            }
        }
        if self.status.is_over() != self.result.is_some() {
            return Err(GameError::Snapshot(format!("status {} does not match result", self.status)));
        }
        if let Some(result) = &self.result {
            if !self.players.contains(&result.winner) {
                return Err(GameError::UnknownPlayer(result.winner.clone()));
            }
        }
        Ok(())
    }
}

impl<R: RandomSource> Game<R> {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            current: self.current,
            board: self.board.clone(),
            dice: self.dice.clone(),
            status: self.status,
            result: self.result.clone(),
            turn: self.turn,
            history: self.history.clone(),
            config: self.config.clone(),
        }
    }

    /// Rebuild a game from a snapshot, rolling future dice from `source`.
    ///
    /// Rejects snapshots that break the game's invariants.
    pub fn restore(snapshot: GameSnapshot, source: R) -> Result<Self, GameError> {
        snapshot.validate()?;
        Ok(Self {
            players: snapshot.players,
            current: snapshot.current,
            board: snapshot.board,
            dice: snapshot.dice,
            status: snapshot.status,
            result: snapshot.result,
            turn: snapshot.turn,
            history: snapshot.history,
            engine: MoveRuleEngine::new(snapshot.config.bar_entry),
            config: snapshot.config,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRolls, GameRng};
    use crate::rules::WinReason;

    fn started() -> Game<FixedRolls> {
        let rolls = FixedRolls::new([(6, 4), (2, 2)]);
        let mut game = Game::with_source("Ana", "Bo", GameConfig::default(), rolls).unwrap();
        game.start_game();
        game
    }

    #[test]
    fn test_snapshot_restore() {
        let mut game = started();
        game.roll_dice().unwrap();
        game.attempt_move(23u8, 6).unwrap();

        let snapshot = game.snapshot();
        let restored = Game::restore(snapshot.clone(), GameRng::new(9)).unwrap();

        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.dice().remaining(), &[4]);
        assert_eq!(restored.history().len(), 2);
    }

    #[test]
    fn test_encode_decode() {
        let mut game = started();
        game.roll_dice().unwrap();
        game.surrender().unwrap();

        let snapshot = game.snapshot();
        let bytes = snapshot.encode().unwrap();

        assert_eq!(GameSnapshot::decode(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = started().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_decode_garbage() {
        let err = GameSnapshot::decode(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, GameError::Snapshot(_)));
    }

    #[test]
    fn test_restore_rejects_broken_snapshot() {
        let mut snapshot = started().snapshot();
        snapshot.board.bear_off(5).unwrap();
        snapshot.board.remove_top_checker(5).unwrap();

        let err = Game::restore(snapshot, GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::Snapshot("White has 14 checkers".to_string()));

        let mut snapshot = started().snapshot();
        snapshot.current = 2;
        assert!(Game::restore(snapshot, GameRng::new(1)).is_err());

        let mut snapshot = started().snapshot();
        snapshot.status = GameStatus::Over;
        assert!(Game::restore(snapshot, GameRng::new(1)).is_err());
    }

    #[test]
    fn test_restore_rejects_mixed_point() {
        // Swap the top checkers of 0 (Black) and 5 (White); totals stay 15/15
        let mut snapshot = started().snapshot();
        let black = snapshot.board.remove_top_checker(0).unwrap();
        let white = snapshot.board.remove_top_checker(5).unwrap();
        snapshot.board.add_checker(0, white).unwrap();
        snapshot.board.add_checker(5, black).unwrap();

        for color in Color::ALL {
            assert_eq!(snapshot.board.total_checkers(color), CHECKERS_PER_COLOR);
        }
        let err = Game::restore(snapshot, GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::Snapshot("point 0 holds both colors".to_string()));
    }

    #[test]
    fn test_total_checkers_counts_each_checker() {
        let mut snapshot = started().snapshot();
        let white = snapshot.board.remove_top_checker(5).unwrap();
        snapshot.board.add_checker(0, white).unwrap();

        assert_eq!(snapshot.board.total_checkers(Color::White), CHECKERS_PER_COLOR);
        assert_eq!(snapshot.board.total_checkers(Color::Black), CHECKERS_PER_COLOR);
        assert_eq!(snapshot.board.mixed_point(), Some(0));
    }

    #[test]
    fn test_restore_rejects_foreign_winner() {
        let mut game = started();
        game.surrender().unwrap();
        let mut snapshot = game.snapshot();
        let mallory = Player::new("Mallory", Color::White).unwrap();
        snapshot.result = Some(GameResult::new(mallory.clone(), WinReason::Declared));

        let err = Game::restore(snapshot, GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::UnknownPlayer(mallory));
    }
}
