//! Domain types for the task list.
//!
//! A task list is an insertion-ordered collection of task items plus the
//! uncommitted draft text. Derived pending/completed views are pure filters
//! over the collection that keep relative order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task
///
/// Ids come from the monotonic counter in [`TaskListState`]: unique among all
/// tasks ever created in the session, never reused after removal.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw counter value
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Text of the task; trimmed at creation time and never re-trimmed
    pub text: String,
    /// Whether the task is done
    pub done: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
    /// When the task was last marked done (`None` while pending)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task
    #[must_use]
    pub const fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flips the done flag, keeping `completed_at` consistent with it
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.done = !self.done;
        self.completed_at = self.done.then_some(now);
    }
}

/// State of the task list
///
/// Tasks keep insertion order: adds append, removes preserve the order of the
/// remainder, nothing ever re-sorts. The draft has a lifecycle of its own,
/// independent from the tasks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks in insertion order
    pub tasks: Vec<Task>,
    /// Current uncommitted input text
    pub draft: String,
    /// Monotonic id counter; the next created task takes this value
    pub next_id: u64,
}

impl TaskListState {
    /// Creates a new empty task list state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
            next_id: 1,
        }
    }

    /// Hands out the next id and advances the counter
    pub fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Returns the number of pending tasks
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    /// Checks if the list has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Pending tasks in insertion order
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.done)
    }

    /// Completed tasks in insertion order
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.done)
    }
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new()
    }
}
