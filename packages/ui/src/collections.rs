//! In-memory cached lists of one entity type each, refreshed from the
//! backend. The backend is the single authority: a collection only changes
//! after server confirmation (a load replaces the list wholesale; a mutation
//! applies the server-returned record), never optimistically.

use api::{Contact, Project, Skill};

/// Anything a [`Collection`] can hold: a record with a server-assigned id.
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A single server-confirmed change to apply to a cached list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange<T> {
    /// Append the server-returned record (create).
    Insert(T),
    /// Swap in the server-returned record by id (update).
    Replace(T),
    /// Drop a record by id (delete).
    Remove(String),
}

/// A cached list with a monotonically increasing load generation.
///
/// Loads are two-phase: `begin_load` hands out a generation token, and
/// `finish_load` applies the fetched list only while that token is still
/// current. A response that arrives after the user started a newer load is
/// discarded instead of overwriting fresher state.
#[derive(Clone, Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    generation: u64,
    loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
            loaded: false,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a load completed this session. Tab transitions consult this
    /// to skip redundant fetches.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Start a load; the returned token must accompany `finish_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replace the list with the server's current state, unless a newer load
    /// has started since `generation` was issued. Returns whether it applied.
    pub fn finish_load(&mut self, generation: u64, items: Vec<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.loaded = true;
        true
    }

    /// Append a server-confirmed record (create).
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swap in the server-returned version of a record by id (update).
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Drop a record by id after the server confirmed the delete.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Apply a confirmed change. Outside of `finish_load`, mutations reach
    /// the list only through here, always after the server acknowledged them.
    pub fn apply(&mut self, change: ListChange<T>) {
        match change {
            ListChange::Insert(item) => self.insert(item),
            ListChange::Replace(item) => {
                self.replace(item);
            }
            ListChange::Remove(id) => {
                self.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Contact, ProjectStatus};

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            message: "hi".to_string(),
            read: false,
            created_at: String::new(),
        }
    }

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

    #[test]
    fn test_load_replaces_list() {
        let mut projects = Collection::new();
        assert!(!projects.loaded());

        let generation = projects.begin_load();
        assert!(projects.finish_load(generation, vec![project("p1", "One")]));
        assert!(projects.loaded());
        assert_eq!(projects.items().len(), 1);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut projects = Collection::new();
        let first = projects.begin_load();
        let second = projects.begin_load();

        // The newer load lands first.
        assert!(projects.finish_load(second, vec![project("p2", "Two")]));
        // The stale response arrives late and must not overwrite.
        assert!(!projects.finish_load(first, vec![project("p1", "One")]));

        assert_eq!(projects.items().len(), 1);
        assert_eq!(projects.items()[0].id, "p2");
    }

    #[test]
    fn test_create_appends_server_record() {
        let mut projects = Collection::new();
        let generation = projects.begin_load();
        projects.finish_load(generation, vec![project("p1", "One")]);

        projects.insert(project("p2", "Two"));
        let ids: Vec<_> = projects.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_update_replaces_exactly_the_matching_record() {
        let mut projects = Collection::new();
        let generation = projects.begin_load();
        projects.finish_load(generation, vec![project("p1", "One"), project("p2", "Two")]);

        assert!(projects.replace(project("p2", "Two, renamed")));
        assert_eq!(projects.items()[0].name, "One");
        assert_eq!(projects.items()[1].name, "Two, renamed");

        // Unknown id leaves the list untouched.
        assert!(!projects.replace(project("p9", "Ghost")));
        assert_eq!(projects.items().len(), 2);
    }

    #[test]
    fn test_delete_removes_by_id() {
        let mut contacts = Collection::new();
        let generation = contacts.begin_load();
        contacts.finish_load(generation, vec![contact("c1", "Ada"), contact("c2", "Grace")]);

        assert!(contacts.remove("c1"));
        assert!(!contacts.remove("c1"));
        assert_eq!(contacts.items().len(), 1);
        assert_eq!(contacts.items()[0].id, "c2");
    }
}
