//! Puzzle data and creation.
//!
//! ## Puzzle
//!
//! An immutable record of one challenge: plaintext, shift, ciphertext, and
//! who authored it. The ciphertext is always derived from the plaintext at
//! construction, so the invariant `ciphertext == encode(plaintext, shift)`
//! holds for every `Puzzle` that exists.
//!
//! ## PuzzleFactory
//!
//! Two creation modes:
//! - **Computer**: random phrase from a fixed pool, random shift in `[1, 25]`
//! - **Player-authored**: free text plus a chosen shift, attributed to the
//!   authoring player

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher;
use crate::error::{GameError, GameResult};
use crate::rng::GameRng;

/// Smallest shift a puzzle may use. Zero is excluded: it would leave the
/// ciphertext equal to the plaintext.
pub const SHIFT_MIN: i32 = 1;

/// Largest shift a puzzle may use.
pub const SHIFT_MAX: i32 = 25;

/// Creator attribution for computer-generated puzzles.
pub const COMPUTER_CREATOR: &str = "Computer";

/// Built-in phrase pool for computer-generated puzzles.
pub const PHRASE_POOL: &[&str] = &[
    "HELLO WORLD",
    "CIPHER FUN",
    "SECRET MESSAGE",
    "PUZZLE TIME",
    "CODING IS AWESOME",
    "LEARN CRYPTOGRAPHY",
    "BREAK THE CODE",
    "ANCIENT ROME",
    "JULIUS CAESAR",
    "HIDDEN TREASURE",
];

/// One cipher challenge. Immutable once created; discarded when its round
/// ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    plaintext: String,
    shift: i32,
    ciphertext: String,
    creator: String,
}

impl Puzzle {
    fn new(plaintext: String, shift: i32, creator: String) -> Self {
        debug_assert!((SHIFT_MIN..=SHIFT_MAX).contains(&shift));
        let ciphertext = cipher::encode(&plaintext, shift);
        Self {
            plaintext,
            shift,
            ciphertext,
            creator,
        }
    }

    /// The original message, stored uppercased.
    #[must_use]
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    /// The shift used to encode, in `[1, 25]`.
    #[must_use]
    pub const fn shift(&self) -> i32 {
        self.shift
    }

    /// The encoded message shown to the solver.
    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Who authored the puzzle: a player name, or [`COMPUTER_CREATOR`].
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }
}

/// Produces puzzles for both game modes.
#[derive(Clone, Debug)]
pub struct PuzzleFactory {
    rng: GameRng,
}

impl PuzzleFactory {
    /// Create a factory with a fixed seed (deterministic puzzle sequence).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a factory seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Generate a computer puzzle: random pool phrase, random shift.
    pub fn computer_puzzle(&mut self) -> Puzzle {
        let phrase = self
            .rng
            .choose(PHRASE_POOL)
            .copied()
            .unwrap_or(PHRASE_POOL[0]);
        let shift = self.rng.gen_shift();
        debug!(shift, "generated computer puzzle");
        Puzzle::new(phrase.to_string(), shift, COMPUTER_CREATOR.to_string())
    }

    /// Build a player-authored puzzle.
    ///
    /// The text is uppercased for storage. Rejects empty or whitespace-only
    /// text and shifts outside `[1, 25]`.
    pub fn player_puzzle(&self, text: &str, shift: i32, creator: &str) -> GameResult<Puzzle> {
        if text.trim().is_empty() {
            return Err(GameError::EmptyPuzzleText);
        }
        if !(SHIFT_MIN..=SHIFT_MAX).contains(&shift) {
            return Err(GameError::ShiftOutOfRange(shift));
        }
        debug!(shift, creator, "built player-authored puzzle");
        Ok(Puzzle::new(
            text.to_uppercase(),
            shift,
            creator.to_string(),
        ))
    }
}
