//! Error taxonomy for the game core.
//!
//! Cipher transforms and guess evaluation are total and never fail; errors
//! arise only at configuration, puzzle authoring, and snapshot boundaries.
//! Scoring an unregistered player is a programming invariant violation and
//! panics rather than returning an error (see [`crate::score::ScoreBoard`]).

use thiserror::Error;

use crate::round::Phase;

/// Errors surfaced by the game core.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Player-authored puzzle text was empty or whitespace-only.
    #[error("puzzle text must not be empty")]
    EmptyPuzzleText,

    /// Shift outside the puzzle range `[1, 25]`.
    #[error("shift {0} is outside the puzzle range 1..=25")]
    ShiftOutOfRange(i32),

    /// Max attempts outside the allowed set `{3, 4, 5}`.
    #[error("max attempts must be 3, 4, or 5, got {0}")]
    InvalidMaxAttempts(u32),

    /// Multiplayer requires 2-4 players.
    #[error("multiplayer requires 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    /// A player name was empty or whitespace-only.
    #[error("player names must not be empty")]
    EmptyPlayerName,

    /// Two players were registered under the same name.
    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),

    /// An operation was invoked in the wrong phase.
    #[error("operation not permitted in the {0} phase")]
    OutOfPhase(Phase),

    /// A loaded session snapshot failed semantic validation.
    ///
    /// The in-memory session is left unchanged.
    #[error("invalid session snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Convenience alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
