//! The store object and the ways actions reach it.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::store::action::Action;
use crate::store::mvi::Reducer;
use crate::store::root::{RootReducer, RootState};

/// Anything actions can be sent to.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

type Listener = Box<dyn Fn(&Action, &RootState) + Send + Sync>;

/// Owner of the aggregate state.
///
/// Each dispatch runs the root reducer under the write lock, so reducers
/// never observe a half-applied action. Subscribers run afterwards, outside
/// the lock, in subscription order.
pub struct Store {
    state: RwLock<RootState>,
    listeners: RwLock<Vec<Listener>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        Self {
            state: RwLock::new(state),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current state. Cheap: collections are shared.
    pub fn state(&self) -> RootState {
        self.state.read().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(&self.state.read())
    }

    /// Register a callback invoked after every reduced action.
    pub fn subscribe(&self, listener: impl Fn(&Action, &RootState) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    /// Create a channel whose receiving end is drained by [`Store::run`].
    pub fn channel() -> (ActionSender, ActionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ActionSender(tx), ActionReceiver(rx))
    }

    /// Apply actions from `receiver` until every sender is dropped.
    pub async fn run(self: Arc<Self>, mut receiver: ActionReceiver) {
        while let Some(action) = receiver.0.recv().await {
            self.dispatch(action);
        }
        tracing::debug!("Action channel closed, store loop finished");
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        tracing::trace!(action = %action.kind(), "Dispatch");

        let snapshot = {
            let mut guard = self.state.write();
            let current = std::mem::take(&mut *guard);
            *guard = RootReducer::reduce(current, &action);
            guard.clone()
        };

        for listener in self.listeners.read().iter() {
            listener(&action, &snapshot);
        }
    }
}

/// Sending half of the store channel.
#[derive(Clone)]
pub struct ActionSender(mpsc::UnboundedSender<Action>);

pub struct ActionReceiver(mpsc::UnboundedReceiver<Action>);

impl Dispatch for ActionSender {
    fn dispatch(&self, action: Action) {
        let kind = action.kind();
        if self.0.send(action).is_err() {
            tracing::warn!(action = %kind, "Store loop is gone, action dropped");
        }
    }
}
