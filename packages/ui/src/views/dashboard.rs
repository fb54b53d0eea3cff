//! Admin dashboard view: tabbed content management over the backend API.

use dioxus::prelude::*;

use api::{
    ApiClient, ApiError, Contact, DashboardStats, EmailServiceStatus, Project, ProjectDraft,
    Skill, SkillDraft,
};

use crate::collections::Collection;
use crate::components::{ModalOverlay, ProjectForm, SkillForm};
use crate::dashboard::{
    confirmed_delete, filter_contacts, on_delete_settled, on_submit_settled, on_tab_selected,
    FormMode, LoadAction, LoadedFlags, MutationOutcome, Tab,
};
use crate::icons::{
    FaArrowUpRightFromSquare, FaChartColumn, FaEnvelope, FaEye, FaFolderOpen, FaGear,
    FaMagnifyingGlass, FaPencil, FaPlus, FaRightFromBracket, FaTrash, FaUser,
};
use crate::platform;
use crate::{clear_session, use_session, Icon, SessionSignal};

/// Copy handle bundling every signal the dashboard mutates, so event handlers
/// and spawned futures share one value instead of threading a dozen signals.
#[derive(Clone, Copy, PartialEq)]
struct Controller {
    client: Signal<ApiClient>,
    session: SessionSignal,
    active_tab: Signal<Tab>,
    stats: Signal<DashboardStats>,
    backend_online: Signal<Option<bool>>,
    email_status: Signal<EmailServiceStatus>,
    projects: Signal<Collection<Project>>,
    skills: Signal<Collection<Skill>>,
    contacts: Signal<Collection<Contact>>,
    project_form: Signal<FormMode<Project>>,
    skill_form: Signal<FormMode<Skill>>,
    notice: Signal<Option<String>>,
}

impl Controller {
    fn api(&self) -> ApiClient {
        self.client.peek().clone()
    }

    fn token(&self) -> Option<String> {
        self.session.peek().as_ref().map(|s| s.token.clone())
    }

    /// Route a failed request: a rejected token ends the session (the gate
    /// then redirects to login), anything else becomes an inline notice while
    /// the cached lists keep rendering.
    fn note_failure(mut self, error: ApiError) {
        if let ApiError::Server { status: 401, .. } = error {
            clear_session();
            self.session.set(None);
        } else {
            tracing::error!(error = %error, "dashboard request failed");
            self.notice.set(Some(error.to_string()));
        }
    }

    fn dismiss_notice(mut self) {
        self.notice.set(None);
    }

    /// Tab transition: set the tab, then execute whatever the transition
    /// table declares for it.
    fn select_tab(mut self, tab: Tab) {
        self.active_tab.set(tab);
        self.notice.set(None);
        let flags = LoadedFlags {
            projects: self.projects.peek().loaded(),
            skills: self.skills.peek().loaded(),
            contacts: self.contacts.peek().loaded(),
        };
        for action in on_tab_selected(tab, flags) {
            self.run(action);
        }
    }

    fn run(mut self, action: LoadAction) {
        let client = self.api();
        let Some(token) = self.token() else { return };
        match action {
            LoadAction::FetchStats => {
                spawn(async move {
                    match client.dashboard_stats(&token).await {
                        Ok(fresh) => self.stats.set(fresh),
                        Err(e) => self.note_failure(e),
                    }
                });
            }
            LoadAction::ProbeServices => {
                spawn(async move {
                    self.backend_online.set(Some(client.health_check().await));
                    self.email_status.set(client.email_service_status().await);
                });
            }
            LoadAction::LoadProjects => {
                let generation = self.projects.write().begin_load();
                spawn(async move {
                    match client.admin_projects(&token).await {
                        Ok(items) => {
                            self.projects.write().finish_load(generation, items);
                        }
                        Err(e) => self.note_failure(e),
                    }
                });
            }
            LoadAction::LoadSkills => {
                let generation = self.skills.write().begin_load();
                spawn(async move {
                    match client.public_skills().await {
                        Ok(items) => {
                            self.skills.write().finish_load(generation, items);
                        }
                        Err(e) => self.note_failure(e),
                    }
                });
            }
            LoadAction::LoadContacts => {
                let generation = self.contacts.write().begin_load();
                spawn(async move {
                    match client.admin_contacts(&token).await {
                        Ok(items) => {
                            self.contacts.write().finish_load(generation, items);
                        }
                        Err(e) => self.note_failure(e),
                    }
                });
            }
        }
    }

    /// Counters are never adjusted locally; every successful mutation
    /// re-fetches the dashboard summary instead.
    fn refresh_stats(mut self) {
        let client = self.api();
        let Some(token) = self.token() else { return };
        spawn(async move {
            match client.dashboard_stats(&token).await {
                Ok(fresh) => self.stats.set(fresh),
                Err(e) => self.note_failure(e),
            }
        });
    }

    fn set_project_form(mut self, mode: FormMode<Project>) {
        self.project_form.set(mode);
    }

    fn set_skill_form(mut self, mode: FormMode<Skill>) {
        self.skill_form.set(mode);
    }

    /// Execute a settled project mutation: apply the confirmed list change,
    /// close the form, re-fetch stats, route the failure. What each field
    /// means is decided by the transitions in [`crate::dashboard`].
    fn apply_project_outcome(mut self, outcome: MutationOutcome<Project>) {
        if let Some(change) = outcome.change {
            self.projects.write().apply(change);
        }
        if outcome.close_form {
            self.project_form.set(FormMode::Closed);
        }
        if outcome.refresh_stats {
            self.refresh_stats();
        }
        if let Some(failure) = outcome.failure {
            self.note_failure(failure);
        }
    }

    fn apply_skill_outcome(mut self, outcome: MutationOutcome<Skill>) {
        if let Some(change) = outcome.change {
            self.skills.write().apply(change);
        }
        if outcome.close_form {
            self.skill_form.set(FormMode::Closed);
        }
        if outcome.refresh_stats {
            self.refresh_stats();
        }
        if let Some(failure) = outcome.failure {
            self.note_failure(failure);
        }
    }

    /// Create or update depending on the form mode.
    fn submit_project(self, draft: ProjectDraft) {
        let client = self.api();
        let Some(token) = self.token() else { return };
        let editing = self.project_form.peek().editing().cloned();
        spawn(async move {
            let result = match &editing {
                Some(project) => client.update_project(&project.id, &draft, &token).await,
                None => client.create_project(&draft, &token).await,
            };
            self.apply_project_outcome(on_submit_settled(editing.is_some(), result));
        });
    }

    fn delete_project(self, project: &Project) {
        let confirmed = platform::confirm("Are you sure you want to delete this project?");
        let Some(id) = confirmed_delete(project, confirmed) else {
            return;
        };
        let client = self.api();
        let Some(token) = self.token() else { return };
        spawn(async move {
            let result = client.delete_project(&id, &token).await;
            self.apply_project_outcome(on_delete_settled(&id, result));
        });
    }

    fn submit_skill(self, draft: SkillDraft) {
        let client = self.api();
        let Some(token) = self.token() else { return };
        let editing = self.skill_form.peek().editing().cloned();
        spawn(async move {
            let result = match &editing {
                Some(skill) => client.update_skill(&skill.id, &draft, &token).await,
                None => client.create_skill(&draft, &token).await,
            };
            self.apply_skill_outcome(on_submit_settled(editing.is_some(), result));
        });
    }

    fn delete_skill(self, skill: &Skill) {
        let confirmed = platform::confirm("Are you sure you want to delete this skill?");
        let Some(id) = confirmed_delete(skill, confirmed) else {
            return;
        };
        let client = self.api();
        let Some(token) = self.token() else { return };
        spawn(async move {
            let result = client.delete_skill(&id, &token).await;
            self.apply_skill_outcome(on_delete_settled(&id, result));
        });
    }

    fn logout(mut self) {
        clear_session();
        self.session.set(None);
    }
}

fn tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Overview | Tab::Analytics => rsx! { Icon { icon: FaChartColumn, width: 16, height: 16 } },
        Tab::Projects => rsx! { Icon { icon: FaFolderOpen, width: 16, height: 16 } },
        Tab::Skills => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        Tab::Contacts => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
    }
}

/// Shared admin dashboard view.
///
/// Gated behind a present, parsable session: without one it calls
/// `on_require_login` and renders nothing. Platform packages provide the
/// navigation callbacks.
#[component]
pub fn DashboardView(
    on_view_portfolio: EventHandler<()>,
    on_require_login: EventHandler<()>,
) -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();

    let controller = Controller {
        client: use_signal(move || client),
        session,
        active_tab: use_signal(|| Tab::Overview),
        stats: use_signal(DashboardStats::default),
        backend_online: use_signal(|| Option::<bool>::None),
        email_status: use_signal(|| EmailServiceStatus::Checking),
        projects: use_signal(Collection::new),
        skills: use_signal(Collection::new),
        contacts: use_signal(Collection::new),
        project_form: use_signal(|| FormMode::Closed),
        skill_form: use_signal(|| FormMode::Closed),
        notice: use_signal(|| Option::<String>::None),
    };

    let mut search_term = use_signal(String::new);

    // The initial tab is Overview; run its declared loads once on mount.
    use_future(move || async move {
        for action in on_tab_selected(Tab::Overview, LoadedFlags::default()) {
            controller.run(action);
        }
    });

    // Session gate. A missing or unparsable session aborts rendering and
    // sends the user to login; an expired token lands here too once a
    // request comes back 401.
    let Some(current) = session.read().clone() else {
        on_require_login.call(());
        return rsx! {};
    };

    let active = *controller.active_tab.read();

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h1 { "ADMIN DASHBOARD" }
                div {
                    class: "dashboard-header-actions",
                    span {
                        class: "dashboard-user",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        "{current.user.email}"
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| on_view_portfolio.call(()),
                        Icon { icon: FaEye, width: 14, height: 14 }
                        "View Portfolio"
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| controller.logout(),
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Logout"
                    }
                }
            }

            div {
                class: "dashboard-body",

                nav {
                    class: "dashboard-nav",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if active == tab { "dashboard-nav-item active" } else { "dashboard-nav-item" },
                            onclick: move |_| controller.select_tab(tab),
                            {tab_icon(tab)}
                            span { "{tab.label()}" }
                        }
                    }
                }

                main {
                    class: "dashboard-main",

                    if let Some(message) = controller.notice.read().clone() {
                        div {
                            class: "error-banner",
                            span { "{message}" }
                            button {
                                class: "link-button",
                                onclick: move |_| controller.dismiss_notice(),
                                "Dismiss"
                            }
                        }
                    }

                    {match active {
                        Tab::Overview => rsx! { OverviewTab { controller } },
                        Tab::Projects => rsx! { ProjectsTab { controller } },
                        Tab::Skills => rsx! { SkillsTab { controller } },
                        Tab::Contacts => rsx! { ContactsTab { controller, search_term } },
                        Tab::Analytics => rsx! { AnalyticsTab { controller } },
                    }}
                }
            }

            if controller.project_form.read().is_open() {
                ModalOverlay {
                    on_close: move |_| controller.set_project_form(FormMode::Closed),
                    ProjectForm {
                        project: controller.project_form.read().editing().cloned(),
                        on_submit: move |draft| controller.submit_project(draft),
                        on_cancel: move |_| controller.set_project_form(FormMode::Closed),
                    }
                }
            }

            if controller.skill_form.read().is_open() {
                ModalOverlay {
                    on_close: move |_| controller.set_skill_form(FormMode::Closed),
                    SkillForm {
                        skill: controller.skill_form.read().editing().cloned(),
                        on_submit: move |draft| controller.submit_skill(draft),
                        on_cancel: move |_| controller.set_skill_form(FormMode::Closed),
                    }
                }
            }
        }
    }
}

#[component]
fn OverviewTab(controller: Controller) -> Element {
    let stats = *controller.stats.read();
    let backend = *controller.backend_online.read();
    let email = *controller.email_status.read();

    let pill = |label: &'static str, ok: bool| {
        rsx! {
            span {
                class: if ok { "pill pill-ok" } else { "pill pill-bad" },
                "{label}"
            }
        }
    };

    rsx! {
        section {
            h2 { "Dashboard Overview" }

            div {
                class: "stat-grid",
                StatCard { label: "Projects", value: stats.projects }
                StatCard { label: "Skills", value: stats.skills }
                StatCard { label: "Messages", value: stats.contacts }
                StatCard { label: "Page Views", value: stats.analytics }
            }

            div {
                class: "card",
                h3 { "Quick Actions" }
                div {
                    class: "quick-actions",
                    button {
                        class: "quick-action",
                        onclick: move |_| controller.select_tab(Tab::Projects),
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        span { "Manage Projects" }
                    }
                    button {
                        class: "quick-action",
                        onclick: move |_| controller.select_tab(Tab::Skills),
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        span { "Manage Skills" }
                    }
                    button {
                        class: "quick-action",
                        onclick: move |_| controller.select_tab(Tab::Contacts),
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        span { "View Messages" }
                    }
                }
            }

            div {
                class: "card",
                div {
                    class: "card-heading-row",
                    h3 { "System Status" }
                    button {
                        class: "link-button",
                        onclick: move |_| controller.run(LoadAction::ProbeServices),
                        "Refresh Status"
                    }
                }
                div {
                    class: "status-row",
                    span { "Backend API" }
                    {match backend {
                        Some(true) => pill("ONLINE", true),
                        Some(false) => pill("OFFLINE", false),
                        None => rsx! { span { class: "pill pill-wait", "CHECKING..." } },
                    }}
                }
                div {
                    class: "status-row",
                    span { "Email Service" }
                    {match email {
                        EmailServiceStatus::Online => pill("ONLINE", true),
                        EmailServiceStatus::Offline => pill("OFFLINE", false),
                        EmailServiceStatus::Checking => rsx! { span { class: "pill pill-wait", "CHECKING..." } },
                    }}
                }
                div {
                    class: "status-row",
                    span { "Analytics" }
                    span { class: "pill pill-ok", "TRACKING" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn ProjectsTab(controller: Controller) -> Element {
    let items = controller.projects.read().items().to_vec();

    rsx! {
        section {
            div {
                class: "section-heading-row",
                h2 { "Projects Management" }
                button {
                    class: "primary",
                    onclick: move |_| controller.set_project_form(FormMode::Creating),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Project" }
                }
            }

            if items.is_empty() {
                div {
                    class: "card empty-state",
                    Icon { icon: FaFolderOpen, width: 40, height: 40 }
                    h3 { "No Projects Yet" }
                    p { class: "muted", "Create your first project to get started" }
                    button {
                        class: "primary",
                        onclick: move |_| controller.set_project_form(FormMode::Creating),
                        "Add your first project"
                    }
                }
            }

            for project in items {
                div {
                    key: "{project.id}",
                    class: "card list-card",
                    div {
                        class: "list-card-body",
                        div {
                            class: "list-card-title-row",
                            h3 { "{project.name}" }
                            span {
                                class: "pill status-{project.status.as_str().to_lowercase()}",
                                "{project.status.as_str()}"
                            }
                            if project.featured {
                                span { class: "pill pill-featured", "FEATURED" }
                            }
                        }
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
                                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "GitHub" }
                            }
                            if let Some(url) = &project.live_url {
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                                    "Live Demo"
                                }
                            }
                        }
                    }
                    div {
                        class: "list-card-actions",
                        button {
                            class: "icon-button",
                            title: "Edit Project",
                            onclick: {
                                let project = project.clone();
                                move |_| controller.set_project_form(FormMode::Editing(project.clone()))
                            },
                            Icon { icon: FaPencil, width: 14, height: 14 }
                        }
                        button {
                            class: "icon-button danger",
                            title: "Delete Project",
                            onclick: {
                                let project = project.clone();
                                move |_| controller.delete_project(&project)
                            },
                            Icon { icon: FaTrash, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsTab(controller: Controller) -> Element {
    let items = controller.skills.read().items().to_vec();

    rsx! {
        section {
            div {
                class: "section-heading-row",
                h2 { "Skills Management" }
                button {
                    class: "primary",
                    onclick: move |_| controller.set_skill_form(FormMode::Creating),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Skill" }
                }
            }

            if items.is_empty() {
                div {
                    class: "card empty-state",
                    Icon { icon: FaGear, width: 40, height: 40 }
                    h3 { "No Skills Yet" }
                    p { class: "muted", "Add your technical skills to showcase your expertise" }
                    button {
                        class: "primary",
                        onclick: move |_| controller.set_skill_form(FormMode::Creating),
                        "Add your first skill"
                    }
                }
            }

            div {
                class: "skill-grid",
                for skill in items {
                    div {
                        key: "{skill.id}",
                        class: "card skill-card",
                        div {
                            class: "list-card-title-row",
                            h3 { "{skill.name}" }
                            span { class: "chip", "{skill.category.label()}" }
                            div {
                                class: "list-card-actions",
                                button {
                                    class: "icon-button",
                                    title: "Edit Skill",
                                    onclick: {
                                        let skill = skill.clone();
                                        move |_| controller.set_skill_form(FormMode::Editing(skill.clone()))
                                    },
                                    Icon { icon: FaPencil, width: 14, height: 14 }
                                }
                                button {
                                    class: "icon-button danger",
                                    title: "Delete Skill",
                                    onclick: {
                                        let skill = skill.clone();
                                        move |_| controller.delete_skill(&skill)
                                    },
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                        div {
                            class: "meter-row",
                            span { class: "muted", "Proficiency" }
                            span { "{skill.level}%" }
                        }
                        div {
                            class: "meter",
                            div { class: "meter-fill", style: "width: {skill.level}%" }
                        }
                        div {
                            class: "skill-meta",
                            span { "Order: {skill.order_index}" }
                            span {
                                class: if skill.visible { "ok" } else { "bad" },
                                if skill.visible { "Visible" } else { "Hidden" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactsTab(controller: Controller, search_term: Signal<String>) -> Element {
    let mut search_term = search_term;
    let all = controller.contacts.read().items().to_vec();
    let visible: Vec<Contact> = filter_contacts(&all, &search_term())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section {
            div {
                class: "section-heading-row",
                h2 { "Contact Messages" }
                div {
                    class: "search-field",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "text",
                        placeholder: "Search messages...",
                        value: search_term(),
                        oninput: move |evt| search_term.set(evt.value()),
                    }
                }
            }

            for contact in &visible {
                div {
                    key: "{contact.id}",
                    class: if contact.read { "card contact-card" } else { "card contact-card unread" },
                    div {
                        class: "contact-card-header",
                        div {
                            div {
                                class: "list-card-title-row",
                                h3 { "{contact.name}" }
                                if !contact.read {
                                    span { class: "pill pill-featured", "NEW" }
                                }
                            }
                            p { class: "muted", "{contact.email}" }
                            p { class: "muted timestamp", "{contact.created_at}" }
                        }
                        a {
                            class: "link-button",
                            href: "mailto:{contact.email}",
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            "Reply"
                        }
                    }
                    div {
                        class: "contact-message",
                        p { "{contact.message}" }
                    }
                }
            }

            if visible.is_empty() && !all.is_empty() {
                div {
                    class: "card empty-state",
                    Icon { icon: FaMagnifyingGlass, width: 40, height: 40 }
                    h3 { "No Messages Found" }
                    p { class: "muted", "Try adjusting your search terms" }
                }
            }

            if all.is_empty() {
                div {
                    class: "card empty-state",
                    Icon { icon: FaEnvelope, width: 40, height: 40 }
                    h3 { "No Messages Yet" }
                    p { class: "muted", "Contact messages from your portfolio will appear here" }
                }
            }
        }
    }
}

#[component]
fn AnalyticsTab(controller: Controller) -> Element {
    // Reads the stats cached by the overview load; this tab fetches nothing.
    let stats = *controller.stats.read();

    rsx! {
        section {
            h2 { "Analytics Dashboard" }

            div {
                class: "stat-grid",
                StatCard { label: "Total Views", value: stats.analytics }
                StatCard { label: "Messages", value: stats.contacts }
                StatCard { label: "Projects", value: stats.projects }
                StatCard { label: "Skills", value: stats.skills }
            }

            div {
                class: "card",
                h3 { "Performance" }
                p {
                    class: "muted",
                    "Your portfolio has {stats.analytics} total page views and {stats.contacts} contact inquiries."
                }
            }
        }
    }
}
