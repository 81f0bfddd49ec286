//! Single-page task list built on the tasklist architecture.
//!
//! Users add short text items, mark them done, and remove them. All state is
//! held in memory for the lifetime of the page session. This crate holds the
//! domain half of the system:
//!
//! - Domain model (tasks, the draft text, the monotonic id counter)
//! - State transitions as a pure reducer (silent no-ops for every edge case)
//! - The [`TaskListView`] render projection for the presentation layer
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasklist::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState, TaskListView};
//! use tasklist_core::environment::SystemClock;
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create environment and store
//! let env = TaskListEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
//!
//! // Type into the input and submit
//! store.send(TaskListAction::SetDraft { text: "Buy milk".to_string() }).await?;
//! store.send(TaskListAction::AddTask).await?;
//!
//! // Mark it done
//! let id = store.state(|s| s.tasks[0].id).await;
//! store.send(TaskListAction::ToggleTask { id }).await?;
//!
//! // Render
//! let view = store.state(TaskListView::project).await;
//! println!("{} pending, {} done", view.pending.len(), view.completed.len());
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TaskListAction, TaskListEnvironment, TaskListReducer};
pub use types::{Task, TaskId, TaskListState};
pub use view::TaskListView;
