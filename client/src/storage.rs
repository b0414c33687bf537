//! Browser `localStorage` implementation of the storage capability.
//!
//! Storage is origin-scoped and shared across tabs; a blocked or full
//! `localStorage` degrades to a logged no-op, never an error, matching the
//! best-effort contract of [`store::storage::Storage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use store::storage::Storage;

/// `localStorage`-backed [`Storage`]. Outside a browser every call no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "browser")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write for {key} failed; edits stay in memory");
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (key, value);
        }
    }
}
