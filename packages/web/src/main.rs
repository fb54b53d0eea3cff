use dioxus::prelude::*;

use store::SiteConfig;
use ui::views::{DashboardView, HomeView, LoginView};
use ui::{load_theme_from_storage, SessionProvider, ThemeSignal};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/admin")]
    Admin {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = SiteConfig::from_toml(include_str!("../portfolio.toml")).unwrap_or_default();
    let client = api::ApiClient::from_config(&config);
    use_context_provider(move || client);
    use_context_provider(move || config);

    // Theme context: None persisted falls back to the OS preference. The
    // effect mirrors the flag onto the document root after first render.
    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(store::Theme::default()));
    use_effect(move || {
        load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}

/// Send `/admin` traffic to the dashboard or the login form by session
/// presence.
#[component]
fn Admin() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session.read().is_some() {
        nav.replace(Route::AdminDashboard {});
    } else {
        nav.replace(Route::AdminLogin {});
    }

    rsx! {}
}

#[component]
fn AdminLogin() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::AdminDashboard {});
            },
            on_back: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_view_portfolio: move |_| {
                nav.push(Route::Home {});
            },
            on_require_login: move |_| {
                nav.replace(Route::AdminLogin {});
            },
        }
    }
}
