//! Admin login view.

use dioxus::prelude::*;

use api::{ApiClient, ApiError};

use crate::icons::{FaEye, FaEyeSlash, FaLock};
use crate::{persist_session, use_session, Icon};

/// Shared login view.
///
/// On a successful login the session is persisted and shared before
/// `on_success` fires; on failure nothing is persisted and the inline error
/// keeps the user here. The submit button is disabled while a login call is
/// pending, which is the only re-entrancy guard this flow has.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_| {
        let client = client.clone();
        spawn(async move {
            if pending() {
                return;
            }
            pending.set(true);
            error.set(None);
            match client.login(email().trim(), &password()).await {
                Ok(new_session) => {
                    persist_session(&new_session);
                    session.set(Some(new_session));
                    on_success.call(());
                }
                Err(ApiError::Auth(message)) => {
                    error.set(Some(message));
                }
                Err(e) => {
                    tracing::error!(error = %e, "login request failed");
                    error.set(Some(
                        "Network error. Please check if the backend is running.".to_string(),
                    ));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "card login-card",

                div {
                    class: "login-header",
                    span { class: "login-lock", Icon { icon: FaLock, width: 20, height: 20 } }
                    h1 { "ADMIN ACCESS" }
                    p { class: "muted", "Sign in to manage your portfolio" }
                }

                if let Some(message) = error() {
                    div { class: "error-banner", "{message}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "admin@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    div {
                        class: "password-field",
                        input {
                            id: "login-password",
                            r#type: if show_password() { "text" } else { "password" },
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "password-reveal",
                            title: if show_password() { "Hide password" } else { "Show password" },
                            onclick: move |_| show_password.set(!show_password()),
                            if show_password() {
                                Icon { icon: FaEyeSlash, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaEye, width: 14, height: 14 }
                            }
                        }
                    }
                }

                button {
                    class: "primary login-submit",
                    disabled: pending(),
                    onclick: submit,
                    if pending() { "SIGNING IN..." } else { "SIGN IN" }
                }

                p { class: "muted login-footnote", "Authorized access only. All activities are logged." }
            }

            button {
                class: "link-button",
                onclick: move |_| on_back.call(()),
                "\u{2190} Back to Portfolio"
            }
        }
    }
}
