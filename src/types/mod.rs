//! Data types for the Pulse event-ingestion endpoint
//!
//! This module contains the stored record types and the wire payloads
//! accepted by the ingestion routes.

mod payload;
mod record;

pub use payload::{EventPayload, UpdateUserPayload};
pub use record::{EventKind, LastScene, NewUser, PaidClick, Timestamp};
