//! Storage capability for persisted key/value state.
//!
//! DESIGN
//! ======
//! Stores persist through this trait instead of touching `localStorage`
//! directly, so record logic stays testable natively. Storage is global per
//! browser origin; concurrent tabs can silently overwrite each other — an
//! accepted limitation of the deployment model, not something this layer
//! guards against.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Origin-scoped key/value persistence, `localStorage`-shaped.
///
/// Implementations are infallible by contract: a blocked or full backing
/// store is the implementation's problem to log and swallow, since every
/// caller treats persistence as a best-effort side effect.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`Storage`] for tests and native embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
