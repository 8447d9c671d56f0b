//! Application shell for ttt.
//!
//! Wires the team directory, the task store, and the selected user together:
//! the shell holds the selection, exposes the user-facing intents, and keeps
//! a memoized view of the selected user's tasks.
//!
//! The view cache is invalidated through the store's change subscription
//! rather than a manually bumped version counter: any mutation that went
//! through the store shows up on the receiver, and the next `tasks()` call
//! re-reads. Delete is deliberately not exposed here; the store supports it
//! but the user-facing surface never did.

use std::sync::mpsc::Receiver;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::{StoreChange, Task, TaskStore};
use crate::team::{self, TeamMember};

pub struct AppShell {
    store: TaskStore,
    storage: Storage,
    selected_user: Option<String>,
    changes: Receiver<StoreChange>,
    cached_tasks: Option<Vec<Task>>,
}

impl AppShell {
    /// Build a shell over the given store and storage.
    ///
    /// The selection is restored from storage when present, otherwise taken
    /// from `default_user` (the configured fallback), otherwise left empty.
    pub fn new(store: TaskStore, storage: Storage, default_user: Option<&str>) -> Self {
        let changes = store.subscribe();
        let selected_user = storage
            .read_selected_user()
            .or_else(|| default_user.map(str::to_string))
            .filter(|id| team::get_by_id(id).is_some());

        Self {
            store,
            storage,
            selected_user,
            changes,
            cached_tasks: None,
        }
    }

    /// The team roster, for pickers and validation.
    pub fn team(&self) -> &'static [TeamMember] {
        team::list()
    }

    /// The currently selected member, if a valid one is set.
    pub fn selected_user(&self) -> Option<&'static TeamMember> {
        self.selected_user.as_deref().and_then(team::get_by_id)
    }

    /// Select a user and persist the choice.
    pub fn select_user(&mut self, id: &str) -> Result<&'static TeamMember> {
        let member = team::get_by_id(id).ok_or_else(|| Error::UnknownMember(id.to_string()))?;
        self.storage.write_selected_user(id)?;
        self.selected_user = Some(id.to_string());
        self.cached_tasks = None;
        Ok(member)
    }

    /// The selected user's tasks, memoized.
    ///
    /// Returns the cached list unless a store change arrived since the last
    /// read or the selection changed. No user selected means an empty list,
    /// never an error.
    pub fn tasks(&mut self) -> Result<Vec<Task>> {
        let dirty = self.changes.try_iter().next().is_some();
        if dirty || self.cached_tasks.is_none() {
            // Drain whatever else queued up; one re-read covers them all.
            while self.changes.try_recv().is_ok() {}

            let tasks = match &self.selected_user {
                Some(id) => self.store.list_by_assignee(id)?,
                None => Vec::new(),
            };
            self.cached_tasks = Some(tasks);
        }

        Ok(self.cached_tasks.clone().unwrap_or_default())
    }

    /// Create a task. Validation (non-empty title, known assignee) happens
    /// here, before the store is reached.
    pub fn create_task(&mut self, title: &str, assignee_id: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        if team::get_by_id(assignee_id).is_none() {
            return Err(Error::UnknownMember(assignee_id.to_string()));
        }

        self.store.create(title, assignee_id)
    }

    /// Toggle a task's completion flag.
    pub fn toggle_task(&mut self, task_id: &str) -> Result<Task> {
        self.store
            .toggle_complete(task_id)?
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn shell(temp: &TempDir) -> AppShell {
        let storage = Storage::new(temp.path().to_path_buf());
        let store = TaskStore::new(Box::new(MemoryStore::new()));
        AppShell::new(store, storage, None)
    }

    #[test]
    fn no_selection_means_no_tasks() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);

        assert!(shell.selected_user().is_none());
        assert!(shell.tasks().unwrap().is_empty());
    }

    #[test]
    fn selection_is_validated_and_persisted() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);

        assert!(matches!(
            shell.select_user("99"),
            Err(Error::UnknownMember(_))
        ));

        let member = shell.select_user("2").unwrap();
        assert_eq!(member.name, "Bob Smith");

        // A fresh shell over the same storage restores the selection.
        let storage = Storage::new(temp.path().to_path_buf());
        let store = TaskStore::new(Box::new(MemoryStore::new()));
        let restored = AppShell::new(store, storage, None);
        assert_eq!(restored.selected_user().map(|m| m.id), Some("2"));
    }

    #[test]
    fn default_user_applies_when_nothing_persisted() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        let store = TaskStore::new(Box::new(MemoryStore::new()));

        let shell = AppShell::new(store, storage, Some("3"));
        assert_eq!(shell.selected_user().map(|m| m.name), Some("Carol Williams"));

        // An unknown configured default is ignored, not an error.
        let storage = Storage::new(temp.path().to_path_buf());
        let store = TaskStore::new(Box::new(MemoryStore::new()));
        let shell = AppShell::new(store, storage, Some("nope"));
        assert!(shell.selected_user().is_none());
    }

    #[test]
    fn mutations_invalidate_the_cached_view() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);
        shell.select_user("1").unwrap();

        assert!(shell.tasks().unwrap().is_empty());

        let task = shell.create_task("write tests", "1").unwrap();
        let tasks = shell.tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);

        shell.toggle_task(&task.id).unwrap();
        let tasks = shell.tasks().unwrap();
        assert!(tasks[0].completed);
    }

    #[test]
    fn view_follows_the_selection() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);
        shell.select_user("1").unwrap();

        shell.create_task("mine", "1").unwrap();
        shell.create_task("theirs", "2").unwrap();

        let tasks = shell.tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "mine");

        shell.select_user("2").unwrap();
        let tasks = shell.tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "theirs");
    }

    #[test]
    fn create_task_validates_the_form_fields() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);

        assert!(matches!(shell.create_task("   ", "1"), Err(Error::EmptyTitle)));
        assert!(matches!(
            shell.create_task("ok title", "99"),
            Err(Error::UnknownMember(_))
        ));

        // Titles are trimmed before they reach the store.
        let task = shell.create_task("  padded  ", "1").unwrap();
        assert_eq!(task.title, "padded");
    }

    #[test]
    fn toggle_of_missing_task_is_a_user_error() {
        let temp = TempDir::new().unwrap();
        let mut shell = shell(&temp);

        assert!(matches!(
            shell.toggle_task("nonexistent"),
            Err(Error::TaskNotFound(_))
        ));
    }
}
