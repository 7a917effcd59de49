//! Host key/value persistence.
//!
//! A host application may hand the session a small key/value sink (for
//! example a browser's local storage, or a config file shim). Login
//! mirrors the session identity into it and logout clears it again. The
//! sink is optional; a session without one behaves identically apart from
//! the mirroring.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Sink key for the mirrored base URL.
pub const STORE_KEY_URL: &str = "unbound_url";
/// Sink key for the mirrored user id.
pub const STORE_KEY_USER_ID: &str = "unbound_userId";
/// Sink key for the mirrored namespace.
pub const STORE_KEY_NAMESPACE: &str = "unbound_namespace";

/// A host-provided key/value sink.
///
/// Implementations must tolerate concurrent `set`/`remove` calls from
/// login and logout; no other access pattern is used by the client.
pub trait KeyValueStore: Send + Sync {
    /// Store a value under a key, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-process [`KeyValueStore`] backed by a map.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        store.set(STORE_KEY_NAMESPACE, "acme");
        assert_eq!(store.get(STORE_KEY_NAMESPACE).as_deref(), Some("acme"));

        store.remove(STORE_KEY_NAMESPACE);
        assert_eq!(store.get(STORE_KEY_NAMESPACE), None);

        // Removing again is harmless.
        store.remove(STORE_KEY_NAMESPACE);
    }
}
