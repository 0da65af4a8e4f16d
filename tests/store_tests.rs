//! Integration tests for the event store
//!
//! Covers the durability contract: what was accepted before a restart is
//! present after replay, with the dedup rules intact.

use std::sync::Arc;
use std::thread;

use tempfile::TempDir;

use pulse_metrics::types::{EventKind, Timestamp};
use pulse_metrics::EventStore;

fn ts(n: i64) -> Timestamp {
    Timestamp::Number(n.into())
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.jsonl");

    {
        let store = EventStore::open(&path).unwrap();
        store.insert_user_if_absent("u1", ts(100)).unwrap();
        store.insert_user_if_absent("u2", ts(200)).unwrap();
        store.append_paid_click("u1", ts(300)).unwrap();
        store.update_email("u2", "b@c.com").unwrap();
    }

    let store = EventStore::open(&path).unwrap();
    assert_eq!(store.count(EventKind::NewUser).unwrap(), 2);
    assert_eq!(store.count(EventKind::PaidClick).unwrap(), 1);
    assert!(store.user_exists("u1").unwrap());

    let users = store.list_users().unwrap();
    let u2 = users.iter().find(|u| u.user_id == "u2").unwrap();
    assert_eq!(u2.email.as_deref(), Some("b@c.com"));
}

#[test]
fn test_duplicate_submissions_dedup_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.jsonl");

    {
        let store = EventStore::open(&path).unwrap();
        store.insert_user_if_absent("u1", ts(100)).unwrap();
    }

    {
        // A restarted process still treats the same id as a no-op
        let store = EventStore::open(&path).unwrap();
        assert!(!store.insert_user_if_absent("u1", ts(999)).unwrap());
    }

    let store = EventStore::open(&path).unwrap();
    assert_eq!(store.count(EventKind::NewUser).unwrap(), 1);
    assert_eq!(store.list_users().unwrap()[0].ts, ts(100));
}

#[test]
fn test_concurrent_mixed_writes() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(EventStore::open(temp_dir.path().join("events.jsonl")).unwrap());

    let mut handles = Vec::new();
    for i in 0..4 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            // Everyone races on the same user id and appends distinct clicks
            store.insert_user_if_absent("shared", ts(1)).unwrap();
            store.append_paid_click(&format!("u{}", i), ts(1)).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.count(EventKind::NewUser).unwrap(), 1);
    assert_eq!(store.count(EventKind::PaidClick).unwrap(), 4);
}

#[test]
fn test_update_email_never_creates_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.jsonl");

    {
        let store = EventStore::open(&path).unwrap();
        assert_eq!(store.update_email("ghost", "a@b.com").unwrap(), 0);
    }

    // Nothing was journaled, so nothing reappears on replay either
    let store = EventStore::open(&path).unwrap();
    assert_eq!(store.count(EventKind::NewUser).unwrap(), 0);
    assert!(!store.user_exists("ghost").unwrap());
}

#[test]
fn test_missing_journal_is_an_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = EventStore::open(temp_dir.path().join("never-written.jsonl")).unwrap();

    assert_eq!(store.count(EventKind::NewUser).unwrap(), 0);
    assert_eq!(store.count(EventKind::PaidClick).unwrap(), 0);
    assert_eq!(store.count(EventKind::ReachedLastScene).unwrap(), 0);
}
