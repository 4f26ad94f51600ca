//! Session scoreboard
//!
//! Keeps the best finished sessions of a run in memory.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Maximum number of sessions to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Enemies destroyed
    pub score: u64,
    /// Frames survived
    pub frames: u64,
    /// Which session of the run this was
    pub session: u64,
}

impl ScoreEntry {
    /// Board order: more kills first, then longer survival, then the earlier session
    fn board_order(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(other.frames.cmp(&self.frames))
            .then(self.session.cmp(&other.session))
    }
}

/// Best sessions in board order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished session, returning its 1-based rank if it stays on the board
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        let idx = self
            .entries
            .partition_point(|e| e.board_order(&entry) != Ordering::Greater);
        if idx >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(idx, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(idx + 1)
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }
}
