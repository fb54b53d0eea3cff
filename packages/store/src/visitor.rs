use crate::settings::SettingsStore;

/// Storage key for the anonymous analytics session id.
pub const SESSION_ID_KEY: &str = "portfolio-session-id";

/// Return the anonymous session id used to correlate analytics events,
/// generating and persisting one on first use. The id is never tied to the
/// admin session; it identifies a browser, not a user.
pub fn analytics_session_id<S: SettingsStore>(store: &S) -> String {
    if let Some(existing) = store.get(SESSION_ID_KEY) {
        return existing;
    }
    let id = format!("session_{}_{}", now_millis(), random_suffix());
    store.set(SESSION_ID_KEY, &id);
    id
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn random_suffix() -> String {
    // Matches the shape of Math.random().toString(36).substr(2, 9).
    let mut out = String::with_capacity(9);
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    for _ in 0..9 {
        let idx = (js_sys::Math::random() * ALPHABET.len() as f64) as usize % ALPHABET.len();
        out.push(ALPHABET[idx] as char);
    }
    out
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn random_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("{nanos:09x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_generated_once_then_reused() {
        let store = MemoryStore::new();
        let first = analytics_session_id(&store);
        let second = analytics_session_id(&store);
        assert_eq!(first, second);
        assert!(first.starts_with("session_"));
    }

    #[test]
    fn test_existing_id_is_kept_verbatim() {
        let store = MemoryStore::new();
        store.set(SESSION_ID_KEY, "session_0_legacy");
        assert_eq!(analytics_session_id(&store), "session_0_legacy");
    }
}
