//! Scripted demo for the task list.
//!
//! Plays the role of the presentation collaborator: drives the store through
//! a session and re-renders the view after each mutation.

use std::sync::Arc;
use tasklist::{
    TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState, TaskListView,
};
use tasklist_core::environment::SystemClock;
use tasklist_runtime::{Store, StoreError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type TaskListStore = Store<TaskListState, TaskListAction, TaskListEnvironment, TaskListReducer>;

fn render(view: &TaskListView) {
    println!("\nTodos");

    for task in &view.pending {
        println!("  [ ] {} (#{})", task.text, task.id);
    }

    if !view.completed.is_empty() {
        println!("  Completed — {}", view.completed.len());
        for task in &view.completed {
            println!("  [✓] {} (#{})", task.text, task.id);
        }
    }

    if view.is_empty() {
        println!("  No tasks yet. Add one above!");
    }
}

async fn submit(store: &TaskListStore, text: &str) -> Result<(), StoreError> {
    store
        .send(TaskListAction::SetDraft {
            text: text.to_string(),
        })
        .await?;
    store.send(TaskListAction::AddTask).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Task List Demo ===");

    // Create environment and store
    let env = TaskListEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);

    // Fresh session
    render(&store.state(TaskListView::project).await);

    // Add some tasks
    println!("\n>>> Adding tasks...");
    submit(&store, "Buy milk").await?;
    submit(&store, "Write documentation").await?;
    submit(&store, "Deploy to production").await?;
    render(&store.state(TaskListView::project).await);

    // A whitespace-only submission changes nothing
    println!("\n>>> Submitting a blank draft (ignored)...");
    submit(&store, "   ").await?;
    render(&store.state(TaskListView::project).await);

    // Complete the first task
    let first = store.state(|s| s.tasks[0].id).await;
    println!("\n>>> Completing 'Buy milk'...");
    store.send(TaskListAction::ToggleTask { id: first }).await?;
    render(&store.state(TaskListView::project).await);

    // Remove the last task
    println!("\n>>> Removing 'Deploy to production'...");
    if let Some(last) = store.state(|s| s.tasks.last().map(|t| t.id)).await {
        store.send(TaskListAction::RemoveTask { id: last }).await?;
    }
    render(&store.state(TaskListView::project).await);

    // Clear the rest
    println!("\n>>> Removing the remaining tasks...");
    while let Some(id) = store.state(|s| s.tasks.first().map(|t| t.id)).await {
        store.send(TaskListAction::RemoveTask { id }).await?;
    }
    render(&store.state(TaskListView::project).await);

    // End the page session
    store.close();
    println!("\n=== Session closed ===");

    Ok(())
}
