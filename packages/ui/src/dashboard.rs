//! Dashboard controller state: the active-tab machine, the per-entity form
//! sub-state, the mutation outcomes, and the contact search filter.
//!
//! "Loading on tab switch" and "what happens after a mutation settles" are
//! declared transitions here, not effectful afterthoughts in a view:
//! [`on_tab_selected`], [`on_submit_settled`], [`on_delete_settled`], and
//! [`confirmed_delete`] decide, and the view merely executes whatever they
//! return.

use api::{ApiError, Contact};

use crate::collections::{Entity, ListChange};

/// One active tab at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Projects,
    Skills,
    Contacts,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Projects,
        Tab::Skills,
        Tab::Contacts,
        Tab::Analytics,
    ];

    /// Sidebar menu label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Projects => "Projects",
            Tab::Skills => "Skills",
            Tab::Contacts => "Messages",
            Tab::Analytics => "Analytics",
        }
    }
}

/// The side effects a tab transition triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    FetchStats,
    ProbeServices,
    LoadProjects,
    LoadSkills,
    LoadContacts,
}

/// Which collections have completed a load this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadedFlags {
    pub projects: bool,
    pub skills: bool,
    pub contacts: bool,
}

/// Transition table for entering a tab.
///
/// - Overview refreshes the aggregate counters and re-probes service status.
/// - Projects/Skills/Contacts load their collection, but only the first time
///   this session; revisiting a populated tab fetches nothing.
/// - Analytics reads the already-cached stats and loads nothing.
pub fn on_tab_selected(tab: Tab, loaded: LoadedFlags) -> Vec<LoadAction> {
    match tab {
        Tab::Overview => vec![LoadAction::FetchStats, LoadAction::ProbeServices],
        Tab::Projects if !loaded.projects => vec![LoadAction::LoadProjects],
        Tab::Skills if !loaded.skills => vec![LoadAction::LoadSkills],
        Tab::Contacts if !loaded.contacts => vec![LoadAction::LoadContacts],
        Tab::Projects | Tab::Skills | Tab::Contacts | Tab::Analytics => Vec::new(),
    }
}

/// Modal form sub-state, independent per entity type: opening the skill form
/// never touches the project form and vice versa. Closing (cancel or a
/// successful submit) always returns to `Closed`; a failed submit leaves the
/// form open with the attempted values intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
}

impl<T> FormMode<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            FormMode::Editing(record) => Some(record),
            _ => None,
        }
    }
}

/// The controller's follow-up to a settled mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome<T> {
    /// List change to apply, present only after server confirmation.
    pub change: Option<ListChange<T>>,
    /// Whether the form returns to `Closed`.
    pub close_form: bool,
    /// Counters are never adjusted locally; success re-fetches the summary.
    pub refresh_stats: bool,
    /// Failure to route (inline notice, or session teardown on a rejected
    /// token).
    pub failure: Option<ApiError>,
}

/// Transition for a settled create/update response.
///
/// Success applies the server-returned record (append for create, swap-by-id
/// for update), closes the form, and triggers a stats re-fetch. Failure
/// changes nothing: the list keeps its cached state and the form stays open
/// with the attempted values intact.
pub fn on_submit_settled<T>(editing: bool, result: Result<T, ApiError>) -> MutationOutcome<T> {
    match result {
        Ok(record) => MutationOutcome {
            change: Some(if editing {
                ListChange::Replace(record)
            } else {
                ListChange::Insert(record)
            }),
            close_form: true,
            refresh_stats: true,
            failure: None,
        },
        Err(failure) => MutationOutcome {
            change: None,
            close_form: false,
            refresh_stats: false,
            failure: Some(failure),
        },
    }
}

/// Transition for a settled delete response. There is no form to close;
/// success drops the record and re-fetches the summary.
pub fn on_delete_settled<T>(id: &str, result: Result<(), ApiError>) -> MutationOutcome<T> {
    match result {
        Ok(()) => MutationOutcome {
            change: Some(ListChange::Remove(id.to_string())),
            close_form: false,
            refresh_stats: true,
            failure: None,
        },
        Err(failure) => MutationOutcome {
            change: None,
            close_form: false,
            refresh_stats: false,
            failure: Some(failure),
        },
    }
}

/// Gate for destructive actions: yields the target id only when the user
/// confirmed the prompt. `None` means no request may be issued at all.
pub fn confirmed_delete<T: Entity>(record: &T, confirmed: bool) -> Option<String> {
    confirmed.then(|| record.id().to_string())
}

/// Case-insensitive substring search over name, email, and message. An empty
/// term matches everything.
pub fn filter_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let needle = term.to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&needle)
                || contact.email.to_lowercase().contains(&needle)
                || contact.message.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::Collection;
    use api::{Project, ProjectStatus};

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            tech_stack: Vec::new(),
            status: ProjectStatus::Draft,
            github_url: None,
            live_url: None,
            image: None,
            featured: false,
            order_index: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn loaded_with(items: Vec<Project>) -> Collection<Project> {
        let mut collection = Collection::new();
        let generation = collection.begin_load();
        collection.finish_load(generation, items);
        collection
    }

    fn contact(id: &str, name: &str, email: &str, message: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            read: false,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_overview_refreshes_stats_and_probes() {
        let actions = on_tab_selected(Tab::Overview, LoadedFlags::default());
        assert_eq!(
            actions,
            vec![LoadAction::FetchStats, LoadAction::ProbeServices]
        );
    }

    #[test]
    fn test_collection_tabs_load_once_per_session() {
        let fresh = LoadedFlags::default();
        assert_eq!(
            on_tab_selected(Tab::Projects, fresh),
            vec![LoadAction::LoadProjects]
        );
        assert_eq!(
            on_tab_selected(Tab::Contacts, fresh),
            vec![LoadAction::LoadContacts]
        );

        let populated = LoadedFlags {
            projects: true,
            skills: true,
            contacts: true,
        };
        assert!(on_tab_selected(Tab::Projects, populated).is_empty());
        assert!(on_tab_selected(Tab::Skills, populated).is_empty());
        assert!(on_tab_selected(Tab::Contacts, populated).is_empty());
    }

    #[test]
    fn test_analytics_loads_nothing() {
        assert!(on_tab_selected(Tab::Analytics, LoadedFlags::default()).is_empty());
    }

    #[test]
    fn test_form_mode_transitions() {
        let mut form: FormMode<u32> = FormMode::Closed;
        assert!(!form.is_open());

        form = FormMode::Creating;
        assert!(form.is_open());
        assert!(form.editing().is_none());

        form = FormMode::Editing(7);
        assert_eq!(form.editing(), Some(&7));

        form = FormMode::Closed;
        assert!(!form.is_open());
    }

    #[test]
    fn test_delete_without_confirmation_issues_no_request() {
        let record = project("p1", "One");
        // Declining the prompt yields no target, so no delete call is made.
        assert_eq!(confirmed_delete(&record, false), None);
        assert_eq!(confirmed_delete(&record, true), Some("p1".to_string()));
    }

    #[test]
    fn test_successful_create_appends_and_refreshes_stats() {
        let mut projects = loaded_with(vec![project("p1", "One")]);

        let outcome = on_submit_settled(false, Ok(project("p2", "Two")));
        assert!(outcome.close_form);
        assert!(outcome.refresh_stats);
        assert!(outcome.failure.is_none());

        projects.apply(outcome.change.unwrap());
        let ids: Vec<_> = projects.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_successful_update_replaces_and_refreshes_stats() {
        let mut projects = loaded_with(vec![project("p1", "One"), project("p2", "Two")]);

        let outcome = on_submit_settled(true, Ok(project("p2", "Two, renamed")));
        assert!(outcome.close_form);
        assert!(outcome.refresh_stats);

        projects.apply(outcome.change.unwrap());
        assert_eq!(projects.items().len(), 2);
        assert_eq!(projects.items()[1].name, "Two, renamed");
    }

    #[test]
    fn test_failed_update_leaves_list_and_form_untouched() {
        let before = loaded_with(vec![project("p1", "One"), project("p2", "Two")]);
        let mut projects = before.clone();

        let outcome: MutationOutcome<Project> = on_submit_settled(
            true,
            Err(ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            }),
        );

        // No partial mutation, the form stays open on the attempted values,
        // and no stats re-fetch fires.
        assert!(outcome.change.is_none());
        assert!(!outcome.close_form);
        assert!(!outcome.refresh_stats);
        assert!(matches!(outcome.failure, Some(ApiError::Server { .. })));
        assert_eq!(projects.items(), before.items());

        if let Some(change) = outcome.change {
            projects.apply(change);
        }
        assert_eq!(projects.items(), before.items());
    }

    #[test]
    fn test_successful_delete_removes_and_refreshes_stats() {
        let mut projects = loaded_with(vec![project("p1", "One"), project("p2", "Two")]);

        let outcome: MutationOutcome<Project> = on_delete_settled("p1", Ok(()));
        assert!(outcome.refresh_stats);
        assert!(!outcome.close_form);

        projects.apply(outcome.change.unwrap());
        assert_eq!(projects.items().len(), 1);
        assert_eq!(projects.items()[0].id, "p2");
    }

    #[test]
    fn test_failed_delete_leaves_list_unchanged() {
        let before = loaded_with(vec![project("p1", "One")]);
        let projects = before.clone();

        let outcome: MutationOutcome<Project> =
            on_delete_settled("p1", Err(ApiError::Network("down".to_string())));
        assert!(outcome.change.is_none());
        assert!(!outcome.refresh_stats);
        assert!(matches!(outcome.failure, Some(ApiError::Network(_))));
        assert_eq!(projects.items(), before.items());
    }

    #[test]
    fn test_contact_search_matches_any_field_case_insensitively() {
        let contacts = vec![
            contact("c1", "Ada Lovelace", "ada@analytical.uk", "About engines"),
            contact("c2", "Grace Hopper", "grace@navy.mil", "COBOL question"),
            contact("c3", "Alan Turing", "alan@bletchley.uk", "Enigma"),
        ];

        let by_name = filter_contacts(&contacts, "ada");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "c1");

        let by_email = filter_contacts(&contacts, "NAVY");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, "c2");

        let by_message = filter_contacts(&contacts, "enigma");
        assert_eq!(by_message.len(), 1);
        assert_eq!(by_message[0].id, "c3");

        let by_shared_domain = filter_contacts(&contacts, ".uk");
        assert_eq!(by_shared_domain.len(), 2);

        assert!(filter_contacts(&contacts, "zzz").is_empty());
    }

    #[test]
    fn test_empty_search_term_returns_all() {
        let contacts = vec![
            contact("c1", "Ada", "ada@example.com", "hi"),
            contact("c2", "Grace", "grace@example.com", "hello"),
        ];
        assert_eq!(filter_contacts(&contacts, "").len(), 2);
    }
}
