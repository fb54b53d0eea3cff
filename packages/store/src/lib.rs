pub mod config;
pub mod session;
pub mod settings;
pub mod theme;
pub mod visitor;

pub use settings::{MemoryStore, SettingsStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::SiteConfig;
pub use session::{AdminUser, Session, SessionStore};
pub use theme::{Theme, ThemeStore};
pub use visitor::analytics_session_id;
