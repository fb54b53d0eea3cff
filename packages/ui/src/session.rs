//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::platform::make_settings;

pub type SessionSignal = Signal<Option<Session>>;

/// Get the current session state. `None` means not signed in.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// Provider component that reads the persisted session once and shares it.
/// Wrap the app with this to enable the admin views.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionStore::new(make_settings()).load()));

    rsx! {
        {children}
    }
}

/// Persist a freshly issued session (after a successful login).
pub fn persist_session(session: &Session) {
    SessionStore::new(make_settings()).save(session);
}

/// Drop the persisted session (logout, or a token the backend rejected).
pub fn clear_session() {
    SessionStore::new(make_settings()).clear();
}
