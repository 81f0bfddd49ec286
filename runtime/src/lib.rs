//! # Tasklist Runtime
//!
//! Runtime implementation for the tasklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Change notification**: every mutation publishes a state snapshot to
//!   subscribers (the explicit notify-on-change a view layer re-renders from)
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The store's view session has ended and no further actions are
        /// accepted
        ///
        /// Returned by `send()` after `close()` has been called. State stays
        /// readable so a final render can still happen.
        #[error("Store session is closed")]
        Closed,
    }
}

pub use error::StoreError;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
/// 5. Change notification (state snapshots via a `watch` channel)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let store = Store::new(
///     TaskListState::new(),
///     TaskListReducer::new(),
///     production_environment(),
/// );
///
/// store.send(TaskListAction::AddTask).await?;
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    state_tx: Arc<watch::Sender<S>>,
    closed: Arc<AtomicBool>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        let (state_tx, _) = watch::channel(initial_state.clone());

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            state_tx: Arc::new(state_tx),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires write lock on state
    /// 2. Calls reducer with (state, action, environment)
    /// 3. Publishes a state snapshot to subscribers
    /// 4. Drives returned effects to completion; feedback actions are
    ///    reduced and published the same way
    ///
    /// The call returns only after the action and all of its feedback
    /// actions have been applied, so every `send` is observable in full by
    /// the time it resolves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Closed`] if the store session has ended.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store session is closed");
            return Err(StoreError::Closed);
        }

        tracing::debug!("Processing action");

        let mut queue: VecDeque<Effect<A>> = VecDeque::new();
        queue.extend(self.reduce_and_publish(action).await);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::None => {}
                Effect::Future(future) => {
                    if let Some(feedback) = future.await {
                        tracing::trace!("Effect produced a feedback action");
                        queue.extend(self.reduce_and_publish(feedback).await);
                    }
                }
            }
        }

        tracing::debug!("Action processing completed");
        Ok(())
    }

    /// Run the reducer for one action and publish the resulting snapshot
    async fn reduce_and_publish(&self, action: A) -> SmallVec<[Effect<A>; 4]> {
        let mut state = self.state.write().await;
        tracing::trace!("Acquired write lock on state");

        let effects = self.reducer.reduce(&mut state, action, &self.environment);
        tracing::trace!("Reducer completed, returned {} effects", effects.len());

        let snapshot = state.clone();
        drop(state);

        // No subscribers is fine; pull-based callers read via state()
        let _ = self.state_tx.send(snapshot);

        effects
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released
    /// promptly:
    ///
    /// ```ignore
    /// let task_count = store.state(|s| s.count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to state changes
    ///
    /// The receiver holds the latest snapshot; after every mutation the
    /// snapshot is replaced and waiters are woken. A view layer awaits
    /// `changed()` and re-renders from the new value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state_tx.subscribe()
    }

    /// End the view session
    ///
    /// Subsequent `send()` calls return [`StoreError::Closed`]. Reads remain
    /// available. There are never pending effects at close because `send`
    /// runs effects to completion.
    pub fn close(&self) {
        tracing::info!("Store session closed");
        self.closed.store(true, Ordering::Release);
    }

    /// Whether the session has ended
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            state_tx: Arc::clone(&self.state_tx),
            closed: Arc::clone(&self.closed),
        }
    }
}
