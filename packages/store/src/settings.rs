use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// String key/value storage for the handful of values the client persists
/// (session token, user identity, theme flag, analytics session id).
///
/// Implementations are infallible from the caller's perspective: reads that
/// fail degrade to `None`, writes are best-effort. A corrupted or unavailable
/// backing store degrades to "no persisted state" rather than crashing.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory SettingsStore for testing and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("theme").is_none());

        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        store.remove("theme");
        assert!(store.get("theme").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("admin-token", "abc");
        assert_eq!(other.get("admin-token").as_deref(), Some("abc"));
    }
}
