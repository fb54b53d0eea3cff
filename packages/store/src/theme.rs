use crate::settings::SettingsStore;

/// Storage key for the persisted theme flag.
pub const THEME_KEY: &str = "theme";

/// The two-state color scheme. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persists the theme flag. Like [`crate::SessionStore`], constructed over an
/// injected [`SettingsStore`] with an explicit lifecycle: `load` reads the
/// persisted value once at startup, `set`/`toggle` write through.
#[derive(Clone)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: SettingsStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme, if one was ever saved. Unrecognized values read
    /// as `None` so the caller falls back to its default.
    pub fn load(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).and_then(|v| Theme::parse(&v))
    }

    pub fn set(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip and persist, returning the new theme.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.other();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_double_toggle_restores_persisted_value() {
        let themes = ThemeStore::new(MemoryStore::new());
        themes.set(Theme::Dark);

        let once = themes.toggle(Theme::Dark);
        assert_eq!(once, Theme::Light);
        assert_eq!(themes.load(), Some(Theme::Light));

        let twice = themes.toggle(once);
        assert_eq!(twice, Theme::Dark);
        assert_eq!(themes.load(), Some(Theme::Dark));
    }

    #[test]
    fn test_unrecognized_value_reads_as_none() {
        let backing = MemoryStore::new();
        backing.set(THEME_KEY, "solarized");
        let themes = ThemeStore::new(backing);
        assert!(themes.load().is_none());
    }

    #[test]
    fn test_nothing_persisted_reads_as_none() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert!(themes.load().is_none());
    }
}
