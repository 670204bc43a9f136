//! Player domain models.

use serde::{Deserialize, Serialize};

use crate::content::ContentKind;

/// Per-player tally of drawn prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub truths: u32,
    pub dares: u32,
}

impl PlayerStats {
    /// Increments the counter for a drawn prompt kind.
    pub fn record(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Truth => self.truths += 1,
            ContentKind::Dare => self.dares += 1,
        }
    }
}

/// A participant in the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Creates a new player with zeroed stats.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats: PlayerStats::default(),
        }
    }
}
