//! Persisted session snapshots.
//!
//! The core does not read or write files; an external save/load collaborator
//! owns the bytes. This module defines the record's shape (serde) and its
//! semantic validation, so a malformed snapshot is reported to the caller
//! and never partially applied. `saved_at` is Unix seconds.
//!
//! Capture and restore live on [`crate::round::RoundController`].

use serde::{Deserialize, Serialize};

use crate::config::{GameMode, ALLOWED_MAX_ATTEMPTS};
use crate::error::{GameError, GameResult};
use crate::player::{MAX_PLAYERS, MIN_PLAYERS, SOLO_PLAYER_NAME};
use crate::score::ScoreBoard;

/// Whole-session save record.
///
/// The in-progress puzzle and attempt counter are deliberately absent:
/// restoring always begins a fresh round from `Setup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Player names in slot order.
    pub players: Vec<String>,
    /// Accumulated scores, keyed by the same names.
    pub scores: ScoreBoard,
    /// Round counter at save time.
    pub round: u32,
    /// Game mode.
    pub game_mode: GameMode,
    /// Configured attempt limit.
    pub max_attempts: u32,
    /// Save time, Unix seconds.
    pub saved_at: u64,
}

impl SessionSnapshot {
    /// Check semantic consistency.
    ///
    /// Field absence and type mismatch are caught earlier by serde in the
    /// external loader; this checks the constraints serde cannot express.
    pub fn validate(&self) -> GameResult<()> {
        if !ALLOWED_MAX_ATTEMPTS.contains(&self.max_attempts) {
            return Err(GameError::InvalidSnapshot(format!(
                "max_attempts {} is not one of 3, 4, 5",
                self.max_attempts
            )));
        }
        if self.round == 0 {
            return Err(GameError::InvalidSnapshot("round must be at least 1".into()));
        }
        self.validate_players()?;
        self.validate_scores()
    }

    fn validate_players(&self) -> GameResult<()> {
        match self.game_mode {
            GameMode::Single => {
                if self.players.len() != 1 {
                    return Err(GameError::InvalidSnapshot(format!(
                        "single-player snapshot must list exactly one player, got {}",
                        self.players.len()
                    )));
                }
                if self.players[0] != SOLO_PLAYER_NAME {
                    return Err(GameError::InvalidSnapshot(format!(
                        "single-player snapshot must name the player {SOLO_PLAYER_NAME:?}, got {:?}",
                        self.players[0]
                    )));
                }
            }
            GameMode::Multiplayer => {
                if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
                    return Err(GameError::InvalidSnapshot(format!(
                        "multiplayer snapshot must list 2-4 players, got {}",
                        self.players.len()
                    )));
                }
                for (i, name) in self.players.iter().enumerate() {
                    if name.trim().is_empty() {
                        return Err(GameError::InvalidSnapshot(format!(
                            "player name at slot {i} is empty"
                        )));
                    }
                    // Restore rebuilds the roster from these names verbatim;
                    // padding would desync roster names from score keys.
                    if name.trim() != name {
                        return Err(GameError::InvalidSnapshot(format!(
                            "player name {name:?} has surrounding whitespace"
                        )));
                    }
                    if self.players[..i].contains(name) {
                        return Err(GameError::InvalidSnapshot(format!(
                            "duplicate player name {name:?}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_scores(&self) -> GameResult<()> {
        if self.scores.len() != self.players.len() {
            return Err(GameError::InvalidSnapshot(format!(
                "{} score entries for {} players",
                self.scores.len(),
                self.players.len()
            )));
        }
        for name in &self.players {
            if !self.scores.is_registered(name) {
                return Err(GameError::InvalidSnapshot(format!(
                    "player {name:?} has no score entry"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        let mut scores = ScoreBoard::new();
        scores.register("Alice");
        scores.register("Bob");
        SessionSnapshot {
            players: vec!["Alice".into(), "Bob".into()],
            scores,
            round: 2,
            game_mode: GameMode::Multiplayer,
            max_attempts: 3,
            saved_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_valid_snapshot() {
        assert_eq!(snapshot().validate(), Ok(()));
    }

    #[test]
    fn test_bad_max_attempts() {
        let mut snap = snapshot();
        snap.max_attempts = 7;
        assert!(matches!(
            snap.validate(),
            Err(GameError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_zero_round() {
        let mut snap = snapshot();
        snap.round = 0;
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_single_requires_solo_player() {
        let mut snap = snapshot();
        snap.game_mode = GameMode::Single;
        assert!(snap.validate().is_err());

        let mut scores = ScoreBoard::new();
        scores.register(SOLO_PLAYER_NAME);
        let snap = SessionSnapshot {
            players: vec![SOLO_PLAYER_NAME.into()],
            scores,
            round: 1,
            game_mode: GameMode::Single,
            max_attempts: 5,
            saved_at: 0,
        };
        assert_eq!(snap.validate(), Ok(()));
    }

    #[test]
    fn test_score_entry_mismatch() {
        let mut snap = snapshot();
        snap.players.push("Carol".into());
        snap.scores.register("Carol");
        assert_eq!(snap.validate(), Ok(()));

        snap.players.push("Dave".into());
        snap.scores.register("Eve");
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_duplicate_players() {
        let mut snap = snapshot();
        snap.players = vec!["Alice".into(), "Alice".into()];
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_padded_player_name_rejected() {
        let mut scores = ScoreBoard::new();
        scores.register(" Alice");
        scores.register("Bob");
        let mut snap = snapshot();
        snap.players = vec![" Alice".into(), "Bob".into()];
        snap.scores = scores;
        assert!(matches!(
            snap.validate(),
            Err(GameError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let snap = snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"game_mode\":\"multiplayer\""));
        assert!(json.contains("\"scores\":{\"Alice\":0,\"Bob\":0}"));

        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
