//! Render projection for the presentation collaborator.
//!
//! The view layer receives plain data and emits user intents back as
//! [`TaskListAction`](crate::reducer::TaskListAction)s. [`TaskListView`] is
//! the plain-data half of that contract.

use crate::types::{Task, TaskListState};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the view layer renders
///
/// A pure projection of [`TaskListState`]: `pending` and `completed` are
/// disjoint, together cover the full task list, and each keeps the original
/// insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListView {
    /// Current uncommitted input text
    pub draft: String,
    /// Tasks not yet done, in insertion order
    pub pending: Vec<Task>,
    /// Tasks marked done, in insertion order
    pub completed: Vec<Task>,
    /// Total number of tasks across both partitions
    pub total: usize,
}

impl TaskListView {
    /// Projects the current state into a render snapshot
    #[must_use]
    pub fn project(state: &TaskListState) -> Self {
        let pending: Vec<Task> = state.pending().cloned().collect();
        let completed: Vec<Task> = state.completed().cloned().collect();
        let total = pending.len() + completed.len();

        Self {
            draft: state.draft.clone(),
            pending,
            completed,
            total,
        }
    }

    /// True when there is nothing to list
    ///
    /// The view layer shows the empty-state message in this case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl From<&TaskListState> for TaskListView {
    fn from(state: &TaskListState) -> Self {
        Self::project(state)
    }
}
