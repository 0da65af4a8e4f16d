//! Stored record types for the three event kinds
//!
//! Each kind is a distinct logical table in the event store. NewUser and
//! ReachedLastScene are idempotent sets keyed by user id; PaidClick is an
//! unbounded append log.

use serde::{Deserialize, Serialize};

/// Category of recorded occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// First time a user was seen
    NewUser,
    /// A paid-content click
    PaidClick,
    /// A user reached the terminal application state
    ReachedLastScene,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::NewUser => write!(f, "new_user"),
            EventKind::PaidClick => write!(f, "paid_click"),
            EventKind::ReachedLastScene => write!(f, "reached_last_scene"),
        }
    }
}

/// Client-supplied event timestamp.
///
/// Clients submit `ts` as either a JSON number or a string; the value is
/// stored and echoed back exactly as submitted rather than coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(serde_json::Number),
    Text(String),
}

impl Timestamp {
    /// A zero number or blank string counts as missing for validation.
    pub fn is_present(&self) -> bool {
        match self {
            Timestamp::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Timestamp::Text(s) => !s.trim().is_empty(),
        }
    }
}

/// First-seen marker for a user. Unique by `user_id`; the first submitted
/// `ts` wins and later duplicates are no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub user_id: String,
    pub ts: Timestamp,
    /// Mutable post-creation via the update-user route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One paid-content click. Append-only; duplicates are distinct events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidClick {
    pub user_id: String,
    pub ts: Timestamp,
}

/// First-reached marker for the terminal scene. Unique by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastScene {
    pub user_id: String,
    pub ts: Timestamp,
}
