//! Player roster.
//!
//! Players are identified by slot position and display name. Names are
//! chosen during setup and fixed once the game starts; the roster is the
//! finalized list the controller is constructed with.
//!
//! Single-player sessions use the implicit solo roster: one player named
//! `"Player"`.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Name of the implicit single-player participant.
pub const SOLO_PLAYER_NAME: &str = "Player";

/// Fewest players a multiplayer session accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a multiplayer session accepts.
pub const MAX_PLAYERS: usize = 4;

/// Finalized, validated player list.
///
/// Indices are 0-based slot positions; rotation walks them in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// The implicit single-player roster.
    #[must_use]
    pub fn solo() -> Self {
        Self {
            names: vec![SOLO_PLAYER_NAME.to_string()],
        }
    }

    /// Build a multiplayer roster from 2-4 names.
    ///
    /// Names are trimmed; empty and duplicate names are rejected.
    pub fn multiplayer<S: AsRef<str>>(names: &[S]) -> GameResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }
        let mut cleaned = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            if cleaned.iter().any(|n: &String| n == name) {
                return Err(GameError::DuplicatePlayerName(name.to_string()));
            }
            cleaned.push(name.to_string());
        }
        Ok(Self { names: cleaned })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at a slot index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`; the controller keeps its active index in
    /// range by construction.
    #[must_use]
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Iterate names in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_roster() {
        let roster = Roster::solo();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.name(0), "Player");
    }

    #[test]
    fn test_multiplayer_roster() {
        let roster = Roster::multiplayer(&["Alice", "Bob", "Carol"]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name(1), "Bob");
        let names: Vec<_> = roster.iter().collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_roster_trims_names() {
        let roster = Roster::multiplayer(&["  Alice ", "Bob"]).unwrap();
        assert_eq!(roster.name(0), "Alice");
    }

    #[test]
    fn test_too_few_players() {
        assert_eq!(
            Roster::multiplayer(&["Alice"]),
            Err(GameError::InvalidPlayerCount(1))
        );
    }

    #[test]
    fn test_too_many_players() {
        let names = ["A", "B", "C", "D", "E"];
        assert_eq!(
            Roster::multiplayer(&names),
            Err(GameError::InvalidPlayerCount(5))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Roster::multiplayer(&["Alice", "  "]),
            Err(GameError::EmptyPlayerName)
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        assert_eq!(
            Roster::multiplayer(&["Alice", "Alice"]),
            Err(GameError::DuplicatePlayerName("Alice".to_string()))
        );
    }
}
