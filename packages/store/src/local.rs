//! # localStorage-backed settings — browser-side persistence
//!
//! [`LocalStore`] is the [`SettingsStore`] implementation used on the **web
//! platform**. It persists the client's handful of string values (session
//! token, user identity, theme flag, analytics session id) into the browser's
//! `localStorage` via `web-sys`.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). This keeps the UI resilient: a browser with
//! storage disabled degrades to "no persisted state" rather than crashing,
//! and the user is simply asked to sign in again.

use crate::settings::SettingsStore;

/// localStorage-backed SettingsStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the `web_sys::Storage` handle is fetched
/// per operation because it is not `Send` and the browser caches it anyway.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
