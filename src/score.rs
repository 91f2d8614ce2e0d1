//! Score tracking.
//!
//! Maps player name to accumulated score. Entries are created when players
//! register at setup and live for the whole session; only
//! [`crate::round::RoundController`] writes through [`ScoreBoard::award`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Player name to non-negative score.
///
/// Backed by a `BTreeMap` so display iteration order is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    scores: BTreeMap<String, u32>,
}

impl ScoreBoard {
    /// Empty scoreboard; register players before scoring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player with a zero score. Idempotent: re-registering an
    /// existing name keeps its accumulated score.
    pub fn register(&mut self, name: impl Into<String>) {
        self.scores.entry(name.into()).or_insert(0);
    }

    /// Is this name registered?
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    /// A player's current score.
    ///
    /// Returns `None` for unregistered names.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.scores.get(name).copied()
    }

    /// Award points for a solve: `max(0, max_attempts - attempts_used + 1)`.
    /// Fewer attempts, more points.
    ///
    /// Returns the points granted (possibly 0).
    ///
    /// # Panics
    ///
    /// Panics if `name` is not registered. Setup must register every player
    /// before any round starts, so an unregistered name here is a sequencing
    /// bug, not a recoverable condition.
    pub fn award(&mut self, name: &str, attempts_used: u32, max_attempts: u32) -> u32 {
        let points = (max_attempts + 1).saturating_sub(attempts_used);
        let entry = self
            .scores
            .get_mut(name)
            .unwrap_or_else(|| panic!("scoring unregistered player: {name}"));
        *entry += points;
        info!(player = name, points, total = *entry, "awarded points");
        points
    }

    /// Iterate `(name, score)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
