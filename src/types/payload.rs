//! Wire payloads for the ingestion routes
//!
//! Fields are optional at the deserialization layer so that a missing field
//! is a validation outcome (400 "Invalid payload") rather than a
//! deserialization failure.

use serde::Deserialize;

use super::Timestamp;

/// Body of `POST /events/user`, `/events/paid-click` and `/events/last-scene`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub ts: Option<Timestamp>,
}

impl EventPayload {
    /// Returns the validated fields, or None when `user_id` is missing/blank
    /// or `ts` is missing/zero/blank.
    pub fn validated(&self) -> Option<(&str, &Timestamp)> {
        let user_id = self.user_id.as_deref().filter(|id| !id.trim().is_empty())?;
        let ts = self.ts.as_ref().filter(|ts| ts.is_present())?;
        Some((user_id, ts))
    }
}

/// Body of `POST /events/update-user`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserPayload {
    /// Returns the validated fields, or None when either is missing/blank.
    pub fn validated(&self) -> Option<(&str, &str)> {
        let user_id = self.user_id.as_deref().filter(|id| !id.trim().is_empty())?;
        let email = self.email.as_deref().filter(|e| !e.trim().is_empty())?;
        Some((user_id, email))
    }
}
