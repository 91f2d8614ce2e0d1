//! Round orchestration state machine.
//!
//! ## Phases
//!
//! ```text
//! Setup -> Creating -> Solving -> Results -+
//!            ^                             |
//!            +--------- next round --------+
//! ```
//!
//! Single-player skips `Creating` entirely: the controller generates a
//! computer puzzle and enters `Solving` directly.
//!
//! ## Rotation
//!
//! The active index advances exactly once per puzzle, at submission time, so
//! the player after the author solves. On "next round" the index is left
//! alone: the solver of the finished puzzle authors the next one, and every
//! player authors once before the sequence repeats. The round counter
//! increments when authorship wraps back to the first slot (single-player:
//! every puzzle).
//!
//! The controller exclusively owns the session state and current puzzle;
//! the scoreboard is readable by display code but written only here.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{GameConfig, GameMode};
use crate::error::{GameError, GameResult};
use crate::guess::{self, Evaluation};
use crate::player::Roster;
use crate::puzzle::{Puzzle, PuzzleFactory};
use crate::score::ScoreBoard;
use crate::snapshot::SessionSnapshot;

/// Lifecycle phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Awaiting configuration; no round in progress.
    Setup,
    /// Active player is authoring a puzzle (multiplayer only).
    Creating,
    /// Active player is guessing.
    Solving,
    /// Round finished; answer and scores on display.
    Results,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Creating => write!(f, "creating"),
            Phase::Solving => write!(f, "solving"),
            Phase::Results => write!(f, "results"),
        }
    }
}

/// Mutable per-session state, owned by [`RoundController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Round number, starting at 1.
    pub round: u32,
    /// Active player slot index (author in `Creating`, solver in `Solving`).
    pub active_player: usize,
    /// Guesses consumed on the current puzzle.
    pub attempts: u32,
    /// Current phase.
    pub phase: Phase,
    /// Whether the hint was revealed for the current puzzle.
    pub hint_shown: bool,
}

impl SessionState {
    fn new() -> Self {
        Self {
            round: 1,
            active_player: 0,
            attempts: 0,
            phase: Phase::Setup,
            hint_shown: false,
        }
    }
}

/// Orchestrates puzzle creation, solving, scoring, and turn rotation.
#[derive(Clone, Debug)]
pub struct RoundController {
    config: GameConfig,
    roster: Roster,
    scores: ScoreBoard,
    factory: PuzzleFactory,
    session: SessionState,
    puzzle: Option<Puzzle>,
}

impl RoundController {
    /// Create a controller from a finalized configuration and roster.
    ///
    /// Registers every roster name on the scoreboard. The roster must match
    /// the mode: exactly one player for single-player, 2-4 for multiplayer.
    pub fn new(config: GameConfig, roster: Roster, factory: PuzzleFactory) -> GameResult<Self> {
        match config.mode {
            GameMode::Single if roster.len() != 1 => {
                return Err(GameError::InvalidPlayerCount(roster.len()));
            }
            GameMode::Multiplayer if roster.len() < 2 => {
                return Err(GameError::InvalidPlayerCount(roster.len()));
            }
            _ => {}
        }
        let mut scores = ScoreBoard::new();
        for name in roster.iter() {
            scores.register(name);
        }
        Ok(Self {
            config,
            roster,
            scores,
            factory,
            session: SessionState::new(),
            puzzle: None,
        })
    }

    /// Convenience constructor for a single-player session.
    pub fn single_player(max_attempts: u32, factory: PuzzleFactory) -> GameResult<Self> {
        Self::new(GameConfig::single(max_attempts)?, Roster::solo(), factory)
    }

    // === Accessors ===

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The finalized player list.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to scores for display.
    #[must_use]
    pub const fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Session state for display.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase
    }

    /// The puzzle in play, if a round is in progress.
    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Name of the active player.
    #[must_use]
    pub fn active_player_name(&self) -> &str {
        self.roster.name(self.session.active_player)
    }

    // === Transitions ===

    /// Begin the first round from `Setup`.
    ///
    /// Single-player: generates a computer puzzle, enters `Solving`.
    /// Multiplayer: enters `Creating` with the first player as author.
    pub fn start_round(&mut self) -> GameResult<Phase> {
        self.require_phase(Phase::Setup)?;
        self.begin_puzzle();
        Ok(self.session.phase)
    }

    /// Submit the active player's authored puzzle (multiplayer `Creating`).
    ///
    /// On success the attempt counter resets, the active index advances to
    /// the next player, and the phase becomes `Solving`.
    pub fn submit_puzzle(&mut self, text: &str, shift: i32) -> GameResult<()> {
        self.require_phase(Phase::Creating)?;
        let creator = self.active_player_name().to_string();
        let puzzle = self.factory.player_puzzle(text, shift, &creator)?;
        self.puzzle = Some(puzzle);
        self.session.attempts = 0;
        self.session.hint_shown = false;
        self.session.active_player = (self.session.active_player + 1) % self.roster.len();
        self.session.phase = Phase::Solving;
        info!(
            author = creator.as_str(),
            solver = self.active_player_name(),
            round = self.session.round,
            "puzzle submitted"
        );
        Ok(())
    }

    /// Evaluate a guess from the active solver (`Solving` phase).
    ///
    /// Consumes one attempt. A correct guess awards the solver and moves to
    /// `Results`; exhausting the attempt limit moves to `Results` with no
    /// award. Otherwise the phase stays `Solving`.
    pub fn submit_guess(&mut self, raw_guess: &str) -> GameResult<Evaluation> {
        self.require_phase(Phase::Solving)?;
        // Every transition into Solving installs a puzzle first.
        let puzzle = self.puzzle.as_ref().expect("solving phase without a puzzle");
        let eval = guess::evaluate(
            puzzle,
            raw_guess,
            self.session.attempts,
            self.config.max_attempts,
        );
        self.session.attempts = eval.attempts_used;
        if eval.correct {
            let solver = self.active_player_name().to_string();
            self.scores
                .award(&solver, eval.attempts_used, self.config.max_attempts);
            self.session.phase = Phase::Results;
        } else if eval.exhausted {
            info!(
                round = self.session.round,
                attempts = eval.attempts_used,
                "attempts exhausted"
            );
            self.session.phase = Phase::Results;
        }
        Ok(eval)
    }

    /// Reveal the hint for the current puzzle: its shift value.
    ///
    /// Marks the hint as shown for the round; resets with the next puzzle.
    pub fn hint(&mut self) -> GameResult<i32> {
        self.require_phase(Phase::Solving)?;
        let puzzle = self.puzzle.as_ref().expect("solving phase without a puzzle");
        self.session.hint_shown = true;
        Ok(puzzle.shift())
    }

    /// Advance from `Results` into the next round.
    ///
    /// The active index is not rotated here; it already advanced at puzzle
    /// submission, so the previous solver authors next. The round counter
    /// increments when authorship wraps to the first slot, or on every
    /// puzzle in single-player.
    pub fn next_round(&mut self) -> GameResult<Phase> {
        self.require_phase(Phase::Results)?;
        let wrapped = self.session.active_player == 0;
        if self.config.mode == GameMode::Single || wrapped {
            self.session.round += 1;
        }
        self.begin_puzzle();
        Ok(self.session.phase)
    }

    /// Abandon the round and return to `Setup`.
    ///
    /// Discards the in-progress puzzle and attempt state; scores persist
    /// for the session.
    pub fn abandon(&mut self) {
        info!(round = self.session.round, "round abandoned");
        self.puzzle = None;
        self.session.attempts = 0;
        self.session.hint_shown = false;
        self.session.phase = Phase::Setup;
    }

    // === Snapshots ===

    /// Capture the session into a persistable snapshot.
    ///
    /// `saved_at` is Unix seconds supplied by the caller; the external
    /// save collaborator owns the bytes.
    #[must_use]
    pub fn capture(&self, saved_at: u64) -> SessionSnapshot {
        SessionSnapshot {
            players: self.roster.iter().map(str::to_string).collect(),
            scores: self.scores.clone(),
            round: self.session.round,
            game_mode: self.config.mode,
            max_attempts: self.config.max_attempts,
            saved_at,
        }
    }

    /// Replace the session wholesale from a validated snapshot.
    ///
    /// Validates before touching any state: on error the in-memory session
    /// is unchanged. Restore always lands in `Setup` with no puzzle in
    /// flight.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> GameResult<()> {
        snapshot.validate()?;
        let config = GameConfig::new(snapshot.game_mode, snapshot.max_attempts)?;
        let roster = match snapshot.game_mode {
            GameMode::Single => Roster::solo(),
            GameMode::Multiplayer => Roster::multiplayer(&snapshot.players)?,
        };
        self.config = config;
        self.roster = roster;
        self.scores = snapshot.scores.clone();
        self.session = SessionState {
            round: snapshot.round,
            ..SessionState::new()
        };
        self.puzzle = None;
        info!(round = snapshot.round, mode = %snapshot.game_mode, "session restored");
        Ok(())
    }

    // === Internals ===

    /// Enter the next puzzle's opening phase with fresh per-puzzle state.
    fn begin_puzzle(&mut self) {
        self.session.attempts = 0;
        self.session.hint_shown = false;
        match self.config.mode {
            GameMode::Single => {
                self.puzzle = Some(self.factory.computer_puzzle());
                self.session.phase = Phase::Solving;
            }
            GameMode::Multiplayer => {
                self.puzzle = None;
                self.session.phase = Phase::Creating;
            }
        }
        info!(
            round = self.session.round,
            phase = %self.session.phase,
            active = self.active_player_name(),
            "round begun"
        );
    }

    fn require_phase(&self, expected: Phase) -> GameResult<()> {
        if self.session.phase == expected {
            Ok(())
        } else {
            Err(GameError::OutOfPhase(self.session.phase))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(names: &[&str]) -> RoundController {
        RoundController::new(
            GameConfig::multiplayer(3).unwrap(),
            Roster::multiplayer(names).unwrap(),
            PuzzleFactory::new(42),
        )
        .unwrap()
    }

    #[test]
    fn test_single_player_skips_creating() {
        let mut game = RoundController::single_player(3, PuzzleFactory::new(42)).unwrap();
        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.start_round().unwrap(), Phase::Solving);
        assert!(game.puzzle().is_some());
        assert_eq!(game.puzzle().unwrap().creator(), "Computer");
    }

    #[test]
    fn test_multiplayer_enters_creating() {
        let mut game = multi(&["Alice", "Bob"]);
        assert_eq!(game.start_round().unwrap(), Phase::Creating);
        assert!(game.puzzle().is_none());
        assert_eq!(game.active_player_name(), "Alice");
    }

    #[test]
    fn test_submission_rotates_to_solver() {
        let mut game = multi(&["Alice", "Bob", "Carol"]);
        game.start_round().unwrap();
        game.submit_puzzle("SECRET", 4).unwrap();
        assert_eq!(game.phase(), Phase::Solving);
        assert_eq!(game.active_player_name(), "Bob");
        assert_eq!(game.puzzle().unwrap().creator(), "Alice");
    }

    #[test]
    fn test_mode_roster_mismatch() {
        let result = RoundController::new(
            GameConfig::single(3).unwrap(),
            Roster::multiplayer(&["Alice", "Bob"]).unwrap(),
            PuzzleFactory::new(0),
        );
        assert_eq!(result.err(), Some(GameError::InvalidPlayerCount(2)));
    }

    #[test]
    fn test_out_of_phase_operations() {
        let mut game = multi(&["Alice", "Bob"]);
        assert_eq!(
            game.submit_guess("HI"),
            Err(GameError::OutOfPhase(Phase::Setup))
        );
        game.start_round().unwrap();
        assert_eq!(
            game.submit_guess("HI"),
            Err(GameError::OutOfPhase(Phase::Creating))
        );
        assert_eq!(
            game.start_round(),
            Err(GameError::OutOfPhase(Phase::Creating))
        );
    }

    #[test]
    fn test_solving_always_has_a_puzzle() {
        // Every transition into Solving installs the puzzle first; guessing
        // and hinting rely on that.
        let mut solo = RoundController::single_player(3, PuzzleFactory::new(2)).unwrap();
        solo.start_round().unwrap();
        assert_eq!(solo.phase(), Phase::Solving);
        assert!(solo.puzzle().is_some());
        let answer = solo.puzzle().unwrap().plaintext().to_string();
        solo.submit_guess(&answer).unwrap();
        solo.next_round().unwrap();
        assert_eq!(solo.phase(), Phase::Solving);
        assert!(solo.puzzle().is_some());

        let mut game = multi(&["Alice", "Bob"]);
        game.start_round().unwrap();
        game.submit_puzzle("HIDDEN", 8).unwrap();
        assert_eq!(game.phase(), Phase::Solving);
        assert!(game.puzzle().is_some());
    }

    #[test]
    fn test_hint_reveals_shift() {
        let mut game = multi(&["Alice", "Bob"]);
        game.start_round().unwrap();
        game.submit_puzzle("SECRET", 9).unwrap();
        assert!(!game.session().hint_shown);
        assert_eq!(game.hint().unwrap(), 9);
        assert!(game.session().hint_shown);
    }

    #[test]
    fn test_abandon_keeps_scores() {
        let mut game = multi(&["Alice", "Bob"]);
        game.start_round().unwrap();
        game.submit_puzzle("SECRET", 4).unwrap();
        game.submit_guess("secret").unwrap();
        assert_eq!(game.scores().get("Bob"), Some(3));

        game.abandon();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.puzzle().is_none());
        assert_eq!(game.session().attempts, 0);
        assert_eq!(game.scores().get("Bob"), Some(3));
    }
}
