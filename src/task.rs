//! Task store for ttt.
//!
//! Tasks are persisted as a single JSON array under one storage key
//! (`team-task-tracker-tasks`), compatible with the browser build's
//! localStorage blob: each element is `{id, title, assigneeId, completed}`.
//!
//! The store is the sole owner of persisted records; every operation hands
//! back owned copies. Mutations are full read-modify-write cycles over the
//! whole collection. Within one process that is fine (nothing here is
//! concurrent); across processes sharing one file the last writer wins and
//! intervening updates are lost. That gap is a documented property of the
//! blob layout, not something the store tries to mask.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::storage::{BlobStore, TASKS_KEY};

/// A tracked task.
///
/// Serialized field names are camelCase so the persisted blob stays
/// byte-compatible with the browser build's localStorage payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee_id: String,
    pub completed: bool,
}

/// A mutation that went through the store.
///
/// Consumers holding a subscription receive one of these after every
/// successful mutation and can use it to invalidate derived views, instead
/// of bumping a version counter by hand after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Created { task: Task },
    Toggled { task: Task },
    Deleted { task_id: String },
}

/// Persistence-backed repository for tasks.
pub struct TaskStore {
    backend: Box<dyn BlobStore>,
    subscribers: Mutex<Vec<Sender<StoreChange>>>,
}

impl TaskStore {
    /// Create a store over the given backing.
    pub fn new(backend: Box<dyn BlobStore>) -> Self {
        Self {
            backend,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to store changes.
    ///
    /// The returned receiver sees every mutation made through this store
    /// instance from the point of subscription on. Dropped receivers are
    /// pruned on the next notification.
    pub fn subscribe(&self) -> Receiver<StoreChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push(tx);
        rx
    }

    /// All tasks, in insertion order.
    ///
    /// An absent blob is an empty store. An unparseable blob is also an
    /// empty store: corruption is swallowed, not surfaced (fail-soft,
    /// deliberately). A warning is traced so the condition is at least
    /// observable under RUST_LOG.
    pub fn list(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.backend.read(TASKS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                tracing::warn!(key = TASKS_KEY, %err, "task blob unparseable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Tasks assigned to the given member, relative order preserved.
    ///
    /// No validation that the id names a known team member.
    pub fn list_by_assignee(&self, assignee_id: &str) -> Result<Vec<Task>> {
        let mut tasks = self.list()?;
        tasks.retain(|task| task.assignee_id == assignee_id);
        Ok(tasks)
    }

    /// Create a task with a fresh id and `completed: false`, append it, and
    /// persist the whole collection. Returns the created record.
    ///
    /// Title validation belongs to the caller; the store appends whatever it
    /// is given.
    pub fn create(&self, title: &str, assignee_id: &str) -> Result<Task> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            assignee_id: assignee_id.to_string(),
            completed: false,
        };

        let mut tasks = self.list()?;
        tasks.push(task.clone());
        self.persist(&tasks)?;

        self.notify(StoreChange::Created { task: task.clone() });
        Ok(task)
    }

    /// Flip the completed flag of the task with the given id.
    ///
    /// Returns `Ok(None)` without persisting when the id is absent.
    pub fn toggle_complete(&self, task_id: &str) -> Result<Option<Task>> {
        let mut tasks = self.list()?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
            return Ok(None);
        };
        task.completed = !task.completed;
        let updated = task.clone();

        self.persist(&tasks)?;

        self.notify(StoreChange::Toggled {
            task: updated.clone(),
        });
        Ok(Some(updated))
    }

    /// Remove the task with the given id.
    ///
    /// Returns `Ok(false)` without persisting when the id is absent.
    pub fn delete(&self, task_id: &str) -> Result<bool> {
        let mut tasks = self.list()?;

        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        if tasks.len() == before {
            return Ok(false);
        }

        self.persist(&tasks)?;

        self.notify(StoreChange::Deleted {
            task_id: task_id.to_string(),
        });
        Ok(true)
    }

    fn persist(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.backend.write(TASKS_KEY, &json)
    }

    fn notify(&self, change: StoreChange) {
        let mut subscribers = self.subscribers.lock().expect("subscriber list poisoned");
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }
}
