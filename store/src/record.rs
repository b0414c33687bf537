//! Generalized ordered record store with write-through persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Blog posts and contact submissions share one lifecycle: hydrate the list
//! once from a remote snapshot, mutate it in memory in response to discrete
//! user events, and write the whole list back to persisted storage after
//! every mutation. This module owns that shared machinery; the typed stores
//! in `post` and `contact` layer domain operations on top.
//!
//! ERROR HANDLING
//! ==============
//! Snapshot parse failures are typed ([`StoreError`]) and left to the caller
//! to fall back on. Not-found on `get`/`update_with`/`delete` is `None`.
//! Persistence itself never fails upward; it is a best-effort side effect.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::Storage;

/// Sentinel filter value that selects every record.
pub const ALL: &str = "all";

/// Error raised when a snapshot document cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot body is not a JSON array of the record shape.
    #[error("failed to parse snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// A record the generalized store can manage.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Persisted-storage key the full list is written under.
    const STORAGE_KEY: &'static str;

    /// File name offered when the list is exported for redeployment.
    const EXPORT_FILE: &'static str;

    /// Identifier used for lookups. Unique by convention only; the store
    /// does not reject collisions, and lookups match the first occurrence.
    fn id(&self) -> &str;
}

/// Ordered in-memory record list, most-recent-first, persisted as a whole
/// after every mutation.
#[derive(Debug)]
pub struct RecordStore<R: Record, S: Storage> {
    records: Vec<R>,
    storage: S,
}

impl<R: Record, S: Storage> RecordStore<R, S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            records: Vec::new(),
            storage,
        }
    }

    /// Replace the list with a parsed snapshot document.
    ///
    /// Returns the number of records loaded. Does not persist: the snapshot
    /// is already the deployed source of truth.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] when `json` is not an array of the
    /// record shape.
    pub fn load_snapshot(&mut self, json: &str) -> Result<usize, StoreError> {
        let records: Vec<R> = serde_json::from_str(json)?;
        let count = records.len();
        self.records = records;
        Ok(count)
    }

    /// Replace the list wholesale, e.g. with seeded defaults. Does not
    /// persist.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Insert a record at the front (most-recent-first) and persist.
    pub fn insert_front(&mut self, record: R) {
        self.records.insert(0, record);
        self.persist();
    }

    /// Find a record by id, first match wins.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Mutate the first record matching `id` in place, persist, and return
    /// the updated record. `None` leaves the list untouched.
    pub fn update_with(&mut self, id: &str, mutate: impl FnOnce(&mut R)) -> Option<R> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        mutate(&mut self.records[index]);
        let updated = self.records[index].clone();
        self.persist();
        Some(updated)
    }

    /// Remove the first record matching `id`, persist, and return it.
    pub fn delete(&mut self, id: &str) -> Option<R> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        let removed = self.records.remove(index);
        self.persist();
        Some(removed)
    }

    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty-printed JSON of the current list, snapshot-compatible.
    #[must_use]
    pub fn export_json(&self) -> String {
        // Serializing plain data records cannot fail in practice.
        serde_json::to_string_pretty(&self.records).unwrap_or_default()
    }

    /// The exported list as a `data:` URI suitable for a download link.
    #[must_use]
    pub fn export_data_uri(&self) -> String {
        let json = self.export_json();
        format!(
            "data:application/json;charset=utf-8,{}",
            urlencoding::encode(&json)
        )
    }

    /// Write the full list to storage under [`Record::STORAGE_KEY`], then
    /// log the export reminder. Deploying the change into the static site's
    /// data directory is a manual step; the log points at it.
    fn persist(&mut self) {
        let Ok(raw) = serde_json::to_string(&self.records) else {
            return;
        };
        self.storage.set(R::STORAGE_KEY, &raw);
        log::info!(
            "{} updated; download {} to update the deployed data: {}",
            R::STORAGE_KEY,
            R::EXPORT_FILE,
            self.export_data_uri()
        );
    }
}
