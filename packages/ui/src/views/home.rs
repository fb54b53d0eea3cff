//! Public portfolio page: hero, projects, skills, and the contact form.
//!
//! Strictly read-only against the backend. Fetch failures and empty result
//! sets degrade to fixed placeholder content so the page is never visually
//! broken by backend unavailability.

use dioxus::prelude::*;

use api::{ApiClient, ApiError, ContactForm, Project, Skill};
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
use store::SiteConfig;

use crate::fallback::{displayable_projects, displayable_skills, SKILL_CATEGORY_CARDS};
use crate::icons::{FaArrowUpRightFromSquare, FaEnvelope};
use crate::platform::make_settings;
use crate::{Icon, ThemeToggle};

#[derive(Clone, PartialEq, Default)]
enum SendState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Shared public page view.
#[component]
pub fn HomeView() -> Element {
    let client = use_context::<ApiClient>();
    let config = use_context::<SiteConfig>();

    // Best-effort page-view event; failures are swallowed inside the client.
    {
        let client = client.clone();
        use_future(move || {
            let client = client.clone();
            async move {
                let session_id = store::analytics_session_id(&make_settings());
                client.track_event("page_view", Some("/"), &session_id).await;
            }
        });
    }

    let projects = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { displayable_projects(client.public_projects().await) }
        }
    });

    let skills = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { displayable_skills(client.public_skills().await) }
        }
    });

    let site_name = if config.site.name.is_empty() {
        "Portfolio".to_string()
    } else {
        config.site.name.clone()
    };

    rsx! {
        div {
            class: "home",

            nav {
                class: "home-nav",
                span { class: "home-nav-brand", "{site_name}" }
                div {
                    class: "home-nav-links",
                    a { href: "#projects", "Projects" }
                    a { href: "#skills", "Skills" }
                    a { href: "#contact", "Contact" }
                    ThemeToggle {}
                }
            }

            header {
                class: "hero",
                p { class: "hero-kicker", "PORTFOLIO" }
                h1 { class: "hero-name", "{config.site.owner}" }
                p { class: "hero-title", "{config.site.title}" }
                div {
                    class: "hero-links",
                    if !config.site.github_url.is_empty() {
                        a {
                            href: "{config.site.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaGithub, width: 18, height: 18 }
                        }
                    }
                    if !config.site.linkedin_url.is_empty() {
                        a {
                            href: "{config.site.linkedin_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaLinkedin, width: 18, height: 18 }
                        }
                    }
                    if !config.site.email.is_empty() {
                        a {
                            href: "mailto:{config.site.email}",
                            Icon { icon: FaEnvelope, width: 18, height: 18 }
                        }
                    }
                }
            }

            section {
                id: "projects",
                class: "home-section",
                p { class: "section-kicker", "SELECTED WORK" }
                h2 { "Featured Projects" }
                div {
                    class: "project-grid",
                    {match &*projects.read() {
                        Some(list) => rsx! {
                            for project in list.clone() {
                                ProjectCard { key: "{project.id}", project }
                            }
                        },
                        None => rsx! {
                            p { class: "muted", "Loading projects..." }
                        },
                    }}
                }
            }

            section {
                id: "skills",
                class: "home-section",
                p { class: "section-kicker", "EXPERTISE" }
                h2 { "Skills & Technologies" }
                {match &*skills.read() {
                    Some(Some(list)) => rsx! { SkillBars { skills: list.clone() } },
                    _ => rsx! { StaticSkillCards {} },
                }}
            }

            section {
                id: "contact",
                class: "home-section",
                p { class: "section-kicker", "GET IN TOUCH" }
                h2 { "Contact" }
                ContactSection {}
            }

            footer {
                class: "home-footer",
                p { class: "muted", "\u{00A9} {site_name}" }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let client = use_context::<ApiClient>();

    let track = {
        let client = client.clone();
        let id = project.id.clone();
        move |action: &'static str| {
            let client = client.clone();
            let id = id.clone();
            spawn(async move {
                let session_id = store::analytics_session_id(&make_settings());
                client.track_project(&id, action, &session_id).await;
            });
        }
    };

    rsx! {
        div {
            class: "card project-card",
            h3 { "{project.name}" }
            p { class: "muted", "{project.description}" }
            div {
                class: "chip-row",
                for tech in &project.tech_stack {
                    span { class: "chip", "{tech}" }
                }
            }
            div {
                class: "list-card-links",
                if let Some(url) = &project.github_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: {
                            let track = track.clone();
                            move |_| track("github_click")
                        },
                        Icon { icon: FaGithub, width: 14, height: 14 }
                        "Code"
                    }
                }
                if let Some(url) = &project.live_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: {
                            let track = track.clone();
                            move |_| track("live_click")
                        },
                        Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                        "Live Demo"
                    }
                }
            }
        }
    }
}

#[component]
fn SkillBars(skills: Vec<Skill>) -> Element {
    rsx! {
        div {
            class: "skill-grid",
            for skill in &skills {
                div {
                    key: "{skill.id}",
                    class: "card skill-card",
                    div {
                        class: "meter-row",
                        span { "{skill.name}" }
                        span { class: "muted", "{skill.level}%" }
                    }
                    div {
                        class: "meter",
                        div { class: "meter-fill", style: "width: {skill.level}%" }
                    }
                    span { class: "chip", "{skill.category.label()}" }
                }
            }
        }
    }
}

#[component]
fn StaticSkillCards() -> Element {
    rsx! {
        div {
            class: "skill-grid",
            for card in &SKILL_CATEGORY_CARDS {
                div {
                    class: "card skill-card",
                    h3 { "{card.icon} {card.title}" }
                    div {
                        class: "chip-row",
                        for skill in card.skills {
                            span { class: "chip", "{skill}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    let client = use_context::<ApiClient>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut send_state = use_signal(SendState::default);

    let submit = {
        let client = client.clone();
        move |_| {
            if send_state() == SendState::Sending {
                return;
            }
            let client = client.clone();
            let form = ContactForm {
                name: name(),
                email: email(),
                subject: subject(),
                message: message(),
            };
            spawn(async move {
                send_state.set(SendState::Sending);
                match client.submit_contact(&form).await {
                    Ok(()) => {
                        send_state.set(SendState::Sent);
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                    }
                    Err(ApiError::Validation(reason)) => {
                        send_state.set(SendState::Failed(reason));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "contact submission failed");
                        send_state.set(SendState::Failed(
                            "Failed to send message. Please try again later.".to_string(),
                        ));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "card contact-form",

            {match send_state() {
                SendState::Sent => rsx! {
                    div { class: "success-banner", "Message sent. Thanks for reaching out!" }
                },
                SendState::Failed(reason) => rsx! {
                    div { class: "error-banner", "{reason}" }
                },
                _ => rsx! {},
            }}

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "contact-name", "Name *" }
                    input {
                        id: "contact-name",
                        r#type: "text",
                        placeholder: "Your name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "contact-email", "Email *" }
                    input {
                        id: "contact-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "contact-subject", "Subject" }
                input {
                    id: "contact-subject",
                    r#type: "text",
                    placeholder: "Portfolio Contact",
                    value: subject(),
                    oninput: move |evt| subject.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "contact-message", "Message *" }
                textarea {
                    id: "contact-message",
                    rows: 5,
                    placeholder: "What would you like to talk about?",
                    value: message(),
                    oninput: move |evt| message.set(evt.value()),
                }
            }

            button {
                class: "primary",
                disabled: send_state() == SendState::Sending,
                onclick: submit,
                if send_state() == SendState::Sending { "SENDING..." } else { "SEND MESSAGE" }
            }
        }
    }
}
