//! Platform seams: which settings store backs persistence, and the couple of
//! browser facilities (hard redirect, confirm dialog) the views lean on.

/// The settings store for the web platform: browser localStorage.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_settings() -> store::LocalStore {
    store::LocalStore::new()
}

/// Non-browser fallback: one process-wide in-memory store, so the session
/// survives across reads within a run even without durable storage.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_settings() -> store::MemoryStore {
    use std::sync::OnceLock;
    static FALLBACK: OnceLock<store::MemoryStore> = OnceLock::new();
    FALLBACK.get_or_init(store::MemoryStore::new).clone()
}

/// Hard navigation, for the auth redirects that must escape the router.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(path, "redirect requested outside a browser context");
    }
}

/// Blocking confirmation prompt guarding destructive actions. Declining
/// means the caller must not issue the request.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // No prompt facility outside the browser; treat as confirmed.
        let _ = message;
        true
    }
}
