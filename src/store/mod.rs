//! Reactive state container.
//!
//! A [`Store`] owns one piece of UI state and is the only place it mutates:
//! every change goes through [`Store::dispatch`], which runs the reducer and
//! then notifies every live subscriber. Views subscribe with
//! [`Store::subscribe`] and re-render when a notification arrives.

mod mvi;

pub use mvi::{Intent, Reducer, UiState};

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

/// Thread-safe state container with change notifications.
///
/// Reads are concurrent; a dispatch swaps the state atomically before any
/// subscriber is woken, so a `get()` after a received notification always
/// observes that mutation or a later one.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    subscribers: Arc<Mutex<Vec<SyncSender<()>>>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store seeded with an explicit state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the current state.
    ///
    /// This is cheap because states are small and Clone.
    pub fn get(&self) -> R::State {
        self.state.read().clone()
    }

    /// Run the reducer, store the result, and notify subscribers.
    ///
    /// Returns the new state.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let next = {
            let mut guard = self.state.write();
            let next = R::reduce(std::mem::take(&mut *guard), intent);
            *guard = next.clone();
            next
        };
        self.notify();
        next
    }

    /// Subscribe to change notifications.
    ///
    /// Each dispatch wakes the receiver. Notifications are coalesced: a
    /// pending wakeup already means "state changed, re-read it", so the
    /// channel holds at most one. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<()> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.subscribers.lock().push(tx);
        rx
    }

    /// Number of live subscribers. Dead ones are pruned on dispatch.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    fn notify(&self) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| match tx.try_send(()) {
            Ok(()) => true,
            // A wakeup is already queued; the subscriber will re-read anyway.
            Err(TrySendError::Full(())) => true,
            Err(TrySendError::Disconnected(())) => false,
        });
        tracing::trace!(subscribers = subscribers.len(), "store notified");
    }
}
