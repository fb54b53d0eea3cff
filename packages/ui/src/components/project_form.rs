use dioxus::prelude::*;

use api::payload::{blank_to_none, split_tech_stack};
use api::{Project, ProjectDraft, ProjectStatus};

/// Modal form body for creating or editing a project.
///
/// Holds only strings while the user types; the [`ProjectDraft`] is built at
/// submit time (comma-splitting the tech stack, dropping blank URLs). The
/// parent decides what a submitted draft means: create when `project` is
/// `None`, update otherwise.
#[component]
pub fn ProjectForm(
    project: Option<Project>,
    on_submit: EventHandler<ProjectDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_edit = project.is_some();
    let (init_name, init_description, init_tech, init_status, init_github, init_live, init_featured, init_order) =
        match &project {
            Some(p) => (
                p.name.clone(),
                p.description.clone(),
                p.tech_stack.join(", "),
                p.status,
                p.github_url.clone().unwrap_or_default(),
                p.live_url.clone().unwrap_or_default(),
                p.featured,
                p.order_index,
            ),
            None => (
                String::new(),
                String::new(),
                String::new(),
                ProjectStatus::Draft,
                String::new(),
                String::new(),
                false,
                0,
            ),
        };

    let mut name = use_signal(move || init_name);
    let mut description = use_signal(move || init_description);
    let mut tech_stack = use_signal(move || init_tech);
    let mut status = use_signal(move || init_status);
    let mut github_url = use_signal(move || init_github);
    let mut live_url = use_signal(move || init_live);
    let mut featured = use_signal(move || init_featured);
    let mut order = use_signal(move || init_order);

    let handle_submit = move |_| {
        if name().is_empty() || description().is_empty() {
            return;
        }
        let tech = split_tech_stack(&tech_stack());
        if tech.is_empty() {
            return;
        }
        on_submit.call(ProjectDraft {
            name: name(),
            description: description(),
            tech_stack: tech,
            status: status(),
            github_url: blank_to_none(&github_url()),
            live_url: blank_to_none(&live_url()),
            featured: featured(),
            order: order(),
        });
    };

    rsx! {
        div {
            class: "entity-form",
            h3 { class: "entity-form-title", if is_edit { "EDIT PROJECT" } else { "ADD NEW PROJECT" } }

            div {
                class: "form-field",
                label { "Project name *" }
                input {
                    r#type: "text",
                    placeholder: "Enter project name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Description *" }
                textarea {
                    rows: 4,
                    placeholder: "Describe your project",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Tech stack *" }
                input {
                    r#type: "text",
                    placeholder: "React, TypeScript, Node.js (comma separated)",
                    value: tech_stack(),
                    oninput: move |evt| tech_stack.set(evt.value()),
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Status" }
                    select {
                        value: status().as_str(),
                        onchange: move |evt| {
                            if let Some(parsed) = ProjectStatus::parse(&evt.value()) {
                                status.set(parsed);
                            }
                        },
                        for option_status in ProjectStatus::ALL {
                            option {
                                value: option_status.as_str(),
                                selected: status() == option_status,
                                "{option_status.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Order" }
                    input {
                        r#type: "number",
                        value: "{order()}",
                        oninput: move |evt| order.set(evt.value().parse().unwrap_or(0)),
                    }
                }
            }

            div {
                class: "form-field",
                label { "GitHub URL" }
                input {
                    r#type: "url",
                    placeholder: "https://github.com/username/repo",
                    value: github_url(),
                    oninput: move |evt| github_url.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Live URL" }
                input {
                    r#type: "url",
                    placeholder: "https://your-project.com",
                    value: live_url(),
                    oninput: move |evt| live_url.set(evt.value()),
                }
            }

            div {
                class: "form-check",
                input {
                    r#type: "checkbox",
                    id: "project-featured",
                    checked: featured(),
                    onchange: move |evt| featured.set(evt.checked()),
                }
                label { r#for: "project-featured", "Featured project" }
            }

            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    onclick: handle_submit,
                    if is_edit { "Update project" } else { "Create project" }
                }
            }
        }
    }
}
