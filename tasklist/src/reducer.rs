//! Reducer logic for the task list.
//!
//! Every operation is total: the edge cases (whitespace-only draft, unknown
//! id) reduce to silent no-ops, never to errors. Unknown ids can legitimately
//! arrive from a stale view that still references a removed task.

use crate::types::{Task, TaskId, TaskListState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklist_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer};

/// User intents flowing from the view into the store
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TaskListAction {
    /// Replace the uncommitted input text (one per keystroke)
    SetDraft {
        /// The new draft text, exactly as typed
        text: String,
    },

    /// Commit the draft as a new task (form submission)
    AddTask,

    /// Flip the done flag of the task with `id`
    ToggleTask {
        /// Target task
        id: TaskId,
    },

    /// Remove the task with `id` from the list
    RemoveTask {
        /// Target task
        id: TaskId,
    },
}

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TaskListEnvironment {
    /// Clock for creation and completion timestamps
    pub clock: Arc<dyn Clock>,
}

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the task list
///
/// A pure state machine: every reduction mutates state in place and returns
/// no effects.
#[derive(Clone, Debug)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TaskListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskListAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskListAction::SetDraft { text } => {
                state.draft = text;
            }

            TaskListAction::AddTask => {
                // Whitespace-only drafts are ignored; the draft itself stays put
                let trimmed = state.draft.trim();
                if !trimmed.is_empty() {
                    let text = trimmed.to_owned();
                    let id = state.allocate_id();
                    state.tasks.push(Task::new(id, text, env.clock.now()));
                    state.draft.clear();
                }
            }

            TaskListAction::ToggleTask { id } => {
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.toggle(env.clock.now());
                }
            }

            TaskListAction::RemoveTask { id } => {
                state.tasks.retain(|t| t.id != id);
            }
        }

        SmallVec::new()
    }
}
