//! This crate contains all shared UI for the workspace.

pub mod collections;
pub mod components;
pub mod dashboard;
pub mod fallback;
pub mod platform;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{clear_session, persist_session, use_session, SessionProvider, SessionSignal};

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, toggle_theme, use_theme, ThemeSignal, ThemeToggle,
};

pub use collections::{Collection, Entity, ListChange};
pub use dashboard::{
    confirmed_delete, filter_contacts, on_delete_settled, on_submit_settled, on_tab_selected,
    FormMode, LoadAction, LoadedFlags, MutationOutcome, Tab,
};
