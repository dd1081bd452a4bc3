//! Durable client-side key-value storage.
//!
//! DESIGN
//! ======
//! The session layer never talks to `localStorage` directly; it goes
//! through the [`KeyValue`] port so the auth flow can run against an
//! in-memory map in tests and on non-browser targets. Browser storage
//! failures (private mode, missing window) degrade to "absent" reads
//! and dropped writes rather than errors.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous string key-value storage port.
pub trait KeyValue {
    /// Read a value, `None` when the key is missing or storage is
    /// unavailable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, best-effort.
    fn set(&self, key: &str, value: &str);
    /// Delete a key, best-effort.
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed storage.
///
/// Outside the browser every read yields `None` and writes are no-ops,
/// mirroring how the rest of the crate stubs browser-only facilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl KeyValue for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory storage for tests and native embeddings.
///
/// Clones share the same underlying map, so a test can hand one clone
/// to the code under test and inspect the other afterwards.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
