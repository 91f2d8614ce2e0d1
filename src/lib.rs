//! # caesar-core
//!
//! The game core of an educational Caesar cipher puzzle game: deterministic
//! text transformation, puzzle generation, attempt-limited guess evaluation,
//! score accrual, and multi-round turn rotation.
//!
//! ## Design Principles
//!
//! 1. **One State Machine**: single-player and multiplayer share the same
//!    controller, parameterized by the roster size. Single-player is a
//!    one-player roster that skips the `Creating` phase.
//!
//! 2. **Explicit Ownership**: `RoundController` exclusively owns the session
//!    state and current puzzle. The scoreboard is readable for display but
//!    written only through the controller's scoring path.
//!
//! 3. **Pure Where Possible**: the cipher transform and guess evaluation are
//!    total functions; errors exist only at configuration, authoring, and
//!    snapshot boundaries.
//!
//! Presentation, file I/O, and clipboard concerns live outside this crate;
//! the boundary is in-process function calls plus the serde-shaped
//! [`SessionSnapshot`] for persistence. The cipher is intentionally
//! breakable: this is a teaching toy, not cryptography.
//!
//! ## Modules
//!
//! - `cipher`: pure Caesar encode/decode
//! - `rng`: deterministic seeded RNG for puzzle generation
//! - `puzzle`: puzzle data and the two creation modes
//! - `guess`: guess normalization and attempt-limited evaluation
//! - `score`: per-player score accrual
//! - `player`: validated roster
//! - `config`: game mode and attempt-limit configuration
//! - `round`: the phase state machine and controller
//! - `snapshot`: persisted session record and validation
//! - `error`: error taxonomy

pub mod cipher;
pub mod config;
pub mod error;
pub mod guess;
pub mod player;
pub mod puzzle;
pub mod rng;
pub mod round;
pub mod score;
pub mod snapshot;

// Re-export commonly used types
pub use crate::config::{GameConfig, GameMode, ALLOWED_MAX_ATTEMPTS};
pub use crate::error::{GameError, GameResult};
pub use crate::guess::Evaluation;
pub use crate::player::{Roster, MAX_PLAYERS, MIN_PLAYERS, SOLO_PLAYER_NAME};
pub use crate::puzzle::{Puzzle, PuzzleFactory, COMPUTER_CREATOR, PHRASE_POOL, SHIFT_MAX, SHIFT_MIN};
pub use crate::rng::GameRng;
pub use crate::round::{Phase, RoundController, SessionState};
pub use crate::score::ScoreBoard;
pub use crate::snapshot::SessionSnapshot;
