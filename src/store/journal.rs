//! Journal entries for the append-only event log
//!
//! Every accepted mutation is one JSON line, tagged by event. Replaying the
//! lines in order reproduces the tables exactly, including the dedup rules
//! for the idempotent kinds.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// One persisted mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEntry {
    NewUser { user_id: String, ts: Timestamp },
    PaidClick { user_id: String, ts: Timestamp },
    LastScene { user_id: String, ts: Timestamp },
    EmailUpdated { user_id: String, email: String },
}

impl JournalEntry {
    /// Serialize to a single JSON line (without trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from a single JSON line.
    pub fn from_json_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}
