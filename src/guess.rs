//! Guess normalization and evaluation.
//!
//! Correctness ignores case, spacing, and punctuation: both the plaintext
//! and the guess are reduced to their `A-Z` letters before comparison.
//! Every evaluation consumes one attempt, right or wrong.

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;

/// Outcome of a single guess.
///
/// `correct` and `exhausted` are mutually exclusive; either one ends the
/// round. Neither set means the solver may try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The normalized guess matched the normalized plaintext.
    pub correct: bool,
    /// Wrong, and no attempts remain.
    pub exhausted: bool,
    /// Attempts consumed including this one.
    pub attempts_used: u32,
}

/// Uppercase and strip every character outside `A-Z`.
///
/// ```
/// use caesar_core::guess::normalize;
///
/// assert_eq!(normalize("h e l l o!"), "HELLO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Evaluate a raw guess against a puzzle.
///
/// `attempts_so_far` is the count before this guess; the returned
/// [`Evaluation::attempts_used`] includes it.
#[must_use]
pub fn evaluate(
    puzzle: &Puzzle,
    raw_guess: &str,
    attempts_so_far: u32,
    max_attempts: u32,
) -> Evaluation {
    let attempts_used = attempts_so_far + 1;
    let correct = normalize(raw_guess) == normalize(puzzle.plaintext());
    Evaluation {
        correct,
        exhausted: !correct && attempts_used >= max_attempts,
        attempts_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleFactory;

    fn puzzle(text: &str) -> Puzzle {
        PuzzleFactory::new(0).player_puzzle(text, 5, "Tester").unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello, World!"), "HELLOWORLD");
        assert_eq!(normalize("h e l l o"), "HELLO");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_correct_ignores_case_and_punctuation() {
        let p = puzzle("HELLO WORLD");
        let eval = evaluate(&p, "hello, world!!!", 0, 3);
        assert!(eval.correct);
        assert!(!eval.exhausted);
        assert_eq!(eval.attempts_used, 1);
    }

    #[test]
    fn test_wrong_guess_consumes_attempt() {
        let p = puzzle("HELLO WORLD");
        let eval = evaluate(&p, "goodbye", 0, 3);
        assert!(!eval.correct);
        assert!(!eval.exhausted);
        assert_eq!(eval.attempts_used, 1);
    }

    #[test]
    fn test_exhaustion_on_final_attempt_only() {
        let p = puzzle("HELLO WORLD");
        assert!(!evaluate(&p, "nope", 0, 3).exhausted);
        assert!(!evaluate(&p, "nope", 1, 3).exhausted);
        assert!(evaluate(&p, "nope", 2, 3).exhausted);
    }

    #[test]
    fn test_correct_on_final_attempt_is_not_exhausted() {
        let p = puzzle("HELLO WORLD");
        let eval = evaluate(&p, "hello world", 2, 3);
        assert!(eval.correct);
        assert!(!eval.exhausted);
        assert_eq!(eval.attempts_used, 3);
    }
}
