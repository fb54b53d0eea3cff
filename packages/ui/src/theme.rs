//! Theme context: a persisted light/dark flag mirrored onto the document
//! root, so exactly one of the `light`/`dark` classes is active at a time.

use dioxus::prelude::*;
use store::{Theme, ThemeStore};

use crate::icons::{FaMoon, FaSun};
use crate::platform::make_settings;
use crate::Icon;

pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Read the persisted theme into the signal and apply it to the document.
/// With nothing persisted, the OS preference decides, defaulting to dark.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let initial = ThemeStore::new(make_settings()).load().unwrap_or_else(|| {
        if prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    });
    theme.set(initial);
    apply_theme(initial);
}

/// Flip the theme, persist the new value, and restyle the document.
pub fn toggle_theme(theme: &mut ThemeSignal) {
    let next = ThemeStore::new(make_settings()).toggle(theme());
    theme.set(next);
    apply_theme(next);
}

/// Swap the root element's theme class: both removed, then the active one
/// added back.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(true)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Sun/moon button that flips the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "theme-toggle",
            title: if theme() == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| toggle_theme(&mut theme),
            if theme() == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
