//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Which mode the session runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One implicit player solving computer-generated puzzles.
    Single,
    /// 2-4 players on one device authoring puzzles for each other.
    Multiplayer,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Single => write!(f, "single"),
            GameMode::Multiplayer => write!(f, "multiplayer"),
        }
    }
}

/// Attempt limits the game accepts.
pub const ALLOWED_MAX_ATTEMPTS: [u32; 3] = [3, 4, 5];

/// Session configuration: mode plus attempt limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    pub mode: GameMode,
    /// Guesses allowed per puzzle, one of `{3, 4, 5}`.
    pub max_attempts: u32,
}

impl GameConfig {
    /// Create a configuration, validating the attempt limit.
    pub fn new(mode: GameMode, max_attempts: u32) -> GameResult<Self> {
        if !ALLOWED_MAX_ATTEMPTS.contains(&max_attempts) {
            return Err(GameError::InvalidMaxAttempts(max_attempts));
        }
        Ok(Self { mode, max_attempts })
    }

    /// Single-player configuration.
    pub fn single(max_attempts: u32) -> GameResult<Self> {
        Self::new(GameMode::Single, max_attempts)
    }

    /// Multiplayer configuration.
    pub fn multiplayer(max_attempts: u32) -> GameResult<Self> {
        Self::new(GameMode::Multiplayer, max_attempts)
    }
}
