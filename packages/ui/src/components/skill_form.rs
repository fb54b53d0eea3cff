use dioxus::prelude::*;

use api::payload::blank_to_none;
use api::{Skill, SkillCategory, SkillDraft};

/// Modal form body for creating or editing a skill.
#[component]
pub fn SkillForm(
    skill: Option<Skill>,
    on_submit: EventHandler<SkillDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_edit = skill.is_some();
    let (init_name, init_level, init_category, init_icon, init_color, init_order, init_visible) =
        match &skill {
            Some(s) => (
                s.name.clone(),
                s.level,
                s.category,
                s.icon.clone().unwrap_or_default(),
                s.color.clone().unwrap_or_default(),
                s.order_index,
                s.visible,
            ),
            None => (String::new(), 50, SkillCategory::Frontend, String::new(), String::new(), 0, true),
        };

    let mut name = use_signal(move || init_name);
    let mut level = use_signal(move || init_level);
    let mut category = use_signal(move || init_category);
    let mut icon = use_signal(move || init_icon);
    let mut color = use_signal(move || init_color);
    let mut order = use_signal(move || init_order);
    let mut visible = use_signal(move || init_visible);

    let handle_submit = move |_| {
        if name().is_empty() {
            return;
        }
        on_submit.call(SkillDraft {
            name: name(),
            level: level(),
            category: category(),
            icon: blank_to_none(&icon()),
            color: blank_to_none(&color()),
            order: order(),
            visible: visible(),
        });
    };

    rsx! {
        div {
            class: "entity-form",
            h3 { class: "entity-form-title", if is_edit { "EDIT SKILL" } else { "ADD NEW SKILL" } }

            div {
                class: "form-field",
                label { "Skill name *" }
                input {
                    r#type: "text",
                    placeholder: "Enter skill name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Proficiency level: {level()}%" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{level()}",
                    oninput: move |evt| level.set(evt.value().parse().unwrap_or(50)),
                }
                div {
                    class: "range-legend",
                    span { "Beginner" }
                    span { "Expert" }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "Category" }
                    select {
                        value: category().as_str(),
                        onchange: move |evt| {
                            if let Some(parsed) = SkillCategory::parse(&evt.value()) {
                                category.set(parsed);
                            }
                        },
                        for option_category in SkillCategory::ALL {
                            option {
                                value: option_category.as_str(),
                                selected: category() == option_category,
                                "{option_category.label()}"
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
                label { "Icon (optional)" }
                input {
                    r#type: "text",
                    placeholder: "Icon name or emoji",
                    value: icon(),
                    oninput: move |evt| icon.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Color (optional)" }
                input {
                    r#type: "text",
                    placeholder: "#FF5733 or red",
                    value: color(),
                    oninput: move |evt| color.set(evt.value()),
                }
            }

            div {
                class: "form-check",
                input {
                    r#type: "checkbox",
                    id: "skill-visible",
                    checked: visible(),
                    onchange: move |evt| visible.set(evt.checked()),
                }
                label { r#for: "skill-visible", "Visible on portfolio" }
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
                    if is_edit { "Update skill" } else { "Create skill" }
                }
            }
        }
    }
}
