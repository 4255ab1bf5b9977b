//! Key-value persistence and named record lists.
//!
//! # Responsibility
//! - Define the string key-value contract every widget persists through.
//! - Encode/decode whole record lists as one JSON value per key.
//!
//! # Invariants
//! - `read_records` never fails: absent or corrupt values read as empty.
//! - `write_records` fully replaces the value stored under a key.

use crate::db::DbError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Store key holding the exam reminder list.
pub const EXAM_REMINDERS_KEY: &str = "studenthub_exam_reminders";
/// Store key holding the notes list.
pub const NOTES_KEY: &str = "studenthub_notes";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store scoped to one dashboard profile.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

/// Reads the record list stored under `key`.
///
/// Absent keys, read failures, JSON `null` and unparsable payloads all
/// yield an empty list.
pub fn read_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=records_read module=store status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!("event=records_read module=store status=error key={key} error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(records) => {
            let records = records.unwrap_or_default();
            debug!(
                "event=records_read module=store status=ok key={key} count={}",
                records.len()
            );
            records
        }
        Err(err) => {
            warn!(
                "event=records_read module=store status=corrupt key={key} bytes={} error={err}",
                raw.len()
            );
            Vec::new()
        }
    }
}

/// Serializes `records` as JSON and stores them under `key`.
pub fn write_records<T, S>(store: &S, key: &str, records: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(records).map_err(StoreError::Encode)?;
    store.set_item(key, &encoded)?;
    debug!(
        "event=records_write module=store status=ok key={key} count={}",
        records.len()
    );
    Ok(())
}
