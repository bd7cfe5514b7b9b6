//! Data structures for the game world
//!
//! Defines the mansion map, the clue notebook, the clue index and the
//! suspect roster.

pub mod clue_collection;
pub mod clue_index;
pub mod room;
pub mod suspect;

pub use clue_collection::*;
pub use clue_index::*;
pub use room::*;
pub use suspect::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity levels for messages shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Discovery => "🔍",
            Severity::Warning => "❌",
            Severity::Verdict => "⚖",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Discovery => write!(f, "DISCOVERY"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
