//! Ingestion Service - validates and records one event per call
//!
//! Validation happens here, before any store mutation: a missing/blank
//! `user_id` or missing/zero `ts` rejects the call without touching the
//! store. Kind-specific idempotency lives in the store's conditional-insert
//! primitives; this service only dispatches to them.

use std::sync::Arc;

use crate::store::{EventStore, StoreResult};
use crate::types::{EventKind, EventPayload, UpdateUserPayload};

/// Result of one ingestion call, before HTTP mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The event is durably recorded (or was already, for idempotent kinds).
    ///
    /// A duplicate idempotent submission is indistinguishable from a first
    /// one on purpose: clients can retry without caring which they were.
    Accepted,
    /// Required field missing; nothing was recorded.
    Invalid,
    /// Update target does not exist; nothing was recorded.
    NotFound,
}

/// Validates and records incoming events.
pub struct IngestionService {
    store: Arc<EventStore>,
}

impl IngestionService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// Record one event of the given kind.
    ///
    /// Storage faults propagate as errors; the event is then not durably
    /// recorded and the caller should be told to retry.
    pub fn record(&self, kind: EventKind, payload: &EventPayload) -> StoreResult<IngestOutcome> {
        let Some((user_id, ts)) = payload.validated() else {
            return Ok(IngestOutcome::Invalid);
        };

        match kind {
            EventKind::NewUser => {
                self.store.insert_user_if_absent(user_id, ts.clone())?;
            }
            EventKind::PaidClick => {
                self.store.append_paid_click(user_id, ts.clone())?;
            }
            EventKind::ReachedLastScene => {
                self.store.insert_last_scene_if_absent(user_id, ts.clone())?;
            }
        }

        Ok(IngestOutcome::Accepted)
    }

    /// Update the email of an existing user. Never creates a row.
    pub fn update_user(&self, payload: &UpdateUserPayload) -> StoreResult<IngestOutcome> {
        let Some((user_id, email)) = payload.validated() else {
            return Ok(IngestOutcome::Invalid);
        };

        if self.store.update_email(user_id, email)? == 0 {
            return Ok(IngestOutcome::NotFound);
        }

        Ok(IngestOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (IngestionService, Arc<EventStore>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(EventStore::open(temp_dir.path().join("events.jsonl")).unwrap());
        (IngestionService::new(Arc::clone(&store)), store, temp_dir)
    }

    fn payload(json: &str) -> EventPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_duplicate_new_user_is_accepted_once_stored() {
        let (service, store, _temp_dir) = setup();

        let p = payload(r#"{"userId":"u1","ts":100}"#);
        assert_eq!(service.record(EventKind::NewUser, &p).unwrap(), IngestOutcome::Accepted);
        assert_eq!(service.record(EventKind::NewUser, &p).unwrap(), IngestOutcome::Accepted);

        assert_eq!(store.count(EventKind::NewUser).unwrap(), 1);
    }

    #[test]
    fn test_paid_clicks_are_distinct_events() {
        let (service, store, _temp_dir) = setup();

        let p = payload(r#"{"userId":"u1","ts":100}"#);
        for _ in 0..3 {
            assert_eq!(service.record(EventKind::PaidClick, &p).unwrap(), IngestOutcome::Accepted);
        }

        assert_eq!(store.count(EventKind::PaidClick).unwrap(), 3);
    }

    #[test]
    fn test_missing_fields_never_mutate() {
        let (service, store, _temp_dir) = setup();

        let no_ts = payload(r#"{"userId":"u2"}"#);
        assert_eq!(service.record(EventKind::NewUser, &no_ts).unwrap(), IngestOutcome::Invalid);

        let no_user = payload(r#"{"ts":100}"#);
        assert_eq!(service.record(EventKind::PaidClick, &no_user).unwrap(), IngestOutcome::Invalid);

        assert_eq!(store.count(EventKind::NewUser).unwrap(), 0);
        assert_eq!(store.count(EventKind::PaidClick).unwrap(), 0);
    }

    #[test]
    fn test_update_user_not_found() {
        let (service, store, _temp_dir) = setup();

        let p: UpdateUserPayload =
            serde_json::from_str(r#"{"userId":"u9","email":"a@b.com"}"#).unwrap();
        assert_eq!(service.update_user(&p).unwrap(), IngestOutcome::NotFound);
        assert_eq!(store.count(EventKind::NewUser).unwrap(), 0);
    }

    #[test]
    fn test_update_user_existing() {
        let (service, store, _temp_dir) = setup();

        let create = payload(r#"{"userId":"u1","ts":100}"#);
        service.record(EventKind::NewUser, &create).unwrap();

        let update: UpdateUserPayload =
            serde_json::from_str(r#"{"userId":"u1","email":"a@b.com"}"#).unwrap();
        assert_eq!(service.update_user(&update).unwrap(), IngestOutcome::Accepted);

        let users = store.list_users().unwrap();
        assert_eq!(users[0].email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_update_user_missing_email_is_invalid() {
        let (service, _store, _temp_dir) = setup();

        let p: UpdateUserPayload = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();
        assert_eq!(service.update_user(&p).unwrap(), IngestOutcome::Invalid);
    }
}
