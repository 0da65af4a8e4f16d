//! Event store implementation
//!
//! Three tables, one lock. The map-keyed tables are the uniqueness
//! constraint for the idempotent kinds: a conditional insert checks and
//! inserts under the store lock, so concurrent duplicate submissions cannot
//! produce two rows and neither caller observes an error.
//!
//! Durability rule: the journal line is written and fsynced before the
//! in-memory table mutates. A failed write surfaces as `StorageError` and
//! leaves the tables untouched, so the caller can safely report "not
//! recorded, retry".

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::journal::JournalEntry;
use crate::types::{EventKind, LastScene, NewUser, PaidClick, Timestamp};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StorageError>;

/// Errors that can occur in store operations
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// The three tables. Rows are created only through the store's insert
/// operations; there is no deletion or expiry path.
#[derive(Debug, Default)]
struct Tables {
    new_users: HashMap<String, NewUser>,
    paid_clicks: Vec<PaidClick>,
    last_scenes: HashMap<String, LastScene>,
}

impl Tables {
    /// Apply one journal entry, honoring the same dedup rules as the live
    /// insert paths. An email update for an unknown id is skipped.
    fn apply(&mut self, entry: JournalEntry) {
        match entry {
            JournalEntry::NewUser { user_id, ts } => {
                self.new_users
                    .entry(user_id.clone())
                    .or_insert(NewUser { user_id, ts, email: None });
            }
            JournalEntry::PaidClick { user_id, ts } => {
                self.paid_clicks.push(PaidClick { user_id, ts });
            }
            JournalEntry::LastScene { user_id, ts } => {
                self.last_scenes
                    .entry(user_id.clone())
                    .or_insert(LastScene { user_id, ts });
            }
            JournalEntry::EmailUpdated { user_id, email } => {
                if let Some(user) = self.new_users.get_mut(&user_id) {
                    user.email = Some(email);
                }
            }
        }
    }
}

/// Durable, queryable storage for the three event kinds.
pub struct EventStore {
    journal_path: PathBuf,
    tables: Mutex<Tables>,
}

impl EventStore {
    /// Open a store backed by the given journal file, replaying any
    /// existing entries. A missing file is an empty store, not an error.
    pub fn open<P: AsRef<Path>>(journal_path: P) -> StoreResult<Self> {
        let journal_path = journal_path.as_ref().to_path_buf();
        let mut tables = Tables::default();

        if journal_path.exists() {
            let file = File::open(&journal_path)?;
            let reader = BufReader::new(file);

            for (line_num, line_result) in reader.lines().enumerate() {
                let line = line_result?;
                if line.trim().is_empty() {
                    continue;
                }

                match JournalEntry::from_json_line(&line) {
                    Ok(entry) => tables.apply(entry),
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to parse journal entry at line {}: {}",
                            line_num + 1,
                            e
                        );
                        // Continue loading other entries
                    }
                }
            }
        }

        Ok(Self {
            journal_path,
            tables: Mutex::new(tables),
        })
    }

    /// Append one entry to the journal with fsync.
    fn append_entry(&self, entry: &JournalEntry) -> StoreResult<()> {
        if let Some(parent) = self.journal_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.journal_path)?;

        let json_line = entry.to_json_line()?;
        writeln!(file, "{}", json_line)?;

        // Sync to disk for durability
        file.sync_all()?;

        Ok(())
    }

    /// Conditional insert for the NewUser table.
    ///
    /// Returns true when a row was created, false when the user already
    /// existed (silent no-op preserving the first `ts`). Never errors on a
    /// duplicate.
    pub fn insert_user_if_absent(&self, user_id: &str, ts: Timestamp) -> StoreResult<bool> {
        let mut tables = self.tables.lock();
        if tables.new_users.contains_key(user_id) {
            return Ok(false);
        }

        self.append_entry(&JournalEntry::NewUser {
            user_id: user_id.to_string(),
            ts: ts.clone(),
        })?;
        tables.new_users.insert(
            user_id.to_string(),
            NewUser {
                user_id: user_id.to_string(),
                ts,
                email: None,
            },
        );
        Ok(true)
    }

    /// Conditional insert for the ReachedLastScene table. Same contract as
    /// `insert_user_if_absent`.
    pub fn insert_last_scene_if_absent(&self, user_id: &str, ts: Timestamp) -> StoreResult<bool> {
        let mut tables = self.tables.lock();
        if tables.last_scenes.contains_key(user_id) {
            return Ok(false);
        }

        self.append_entry(&JournalEntry::LastScene {
            user_id: user_id.to_string(),
            ts: ts.clone(),
        })?;
        tables.last_scenes.insert(
            user_id.to_string(),
            LastScene {
                user_id: user_id.to_string(),
                ts,
            },
        );
        Ok(true)
    }

    /// Append one PaidClick row. Always creates a new row; duplicate content
    /// is not an error.
    pub fn append_paid_click(&self, user_id: &str, ts: Timestamp) -> StoreResult<()> {
        let mut tables = self.tables.lock();

        self.append_entry(&JournalEntry::PaidClick {
            user_id: user_id.to_string(),
            ts: ts.clone(),
        })?;
        tables.paid_clicks.push(PaidClick {
            user_id: user_id.to_string(),
            ts,
        });
        Ok(())
    }

    /// Update the email of an existing NewUser row.
    ///
    /// Returns the matched count: 0 when no such user exists (no row is
    /// created as a side effect), 1 otherwise.
    pub fn update_email(&self, user_id: &str, email: &str) -> StoreResult<usize> {
        let mut tables = self.tables.lock();
        if !tables.new_users.contains_key(user_id) {
            return Ok(0);
        }

        self.append_entry(&JournalEntry::EmailUpdated {
            user_id: user_id.to_string(),
            email: email.to_string(),
        })?;
        if let Some(user) = tables.new_users.get_mut(user_id) {
            user.email = Some(email.to_string());
        }
        Ok(1)
    }

    /// Total row count for a kind. Zero is a valid result.
    pub fn count(&self, kind: EventKind) -> StoreResult<usize> {
        let tables = self.tables.lock();
        let count = match kind {
            EventKind::NewUser => tables.new_users.len(),
            EventKind::PaidClick => tables.paid_clicks.len(),
            EventKind::ReachedLastScene => tables.last_scenes.len(),
        };
        Ok(count)
    }

    /// True iff a NewUser row exists for the id.
    pub fn user_exists(&self, user_id: &str) -> StoreResult<bool> {
        Ok(self.tables.lock().new_users.contains_key(user_id))
    }

    /// Full dump of the NewUser table. Insertion order is not guaranteed.
    pub fn list_users(&self) -> StoreResult<Vec<NewUser>> {
        Ok(self.tables.lock().new_users.values().cloned().collect())
    }

    /// Full dump of the PaidClick table.
    pub fn list_paid_clicks(&self) -> StoreResult<Vec<PaidClick>> {
        Ok(self.tables.lock().paid_clicks.clone())
    }

    /// Full dump of the ReachedLastScene table. Insertion order is not
    /// guaranteed.
    pub fn list_last_scenes(&self) -> StoreResult<Vec<LastScene>> {
        Ok(self.tables.lock().last_scenes.values().cloned().collect())
    }
}
