//! Single-owner timeline store.
//!
//! Callers that share one logical timeline dispatch through a
//! `TimelineStore`, which serializes reductions and publishes each result as
//! an immutable snapshot.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::action::Action;
use crate::error::EditError;
use crate::reducer::Reducer;
use crate::state::TimelineState;

/// Notification sent to subscribers after an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEvent {
    /// Revision of the snapshot the action produced
    pub revision: u64,
    /// Action kind (see [`Action::kind`])
    pub action: &'static str,
}

struct Current {
    state: Arc<TimelineState>,
    revision: u64,
}

/// Shared owner of a timeline.
pub struct TimelineStore {
    reducer: Reducer,
    current: RwLock<Current>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl TimelineStore {
    pub fn new(reducer: Reducer, initial: TimelineState) -> Self {
        Self {
            reducer,
            current: RwLock::new(Current {
                state: Arc::new(initial),
                revision: 0,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<TimelineState> {
        Arc::clone(&self.current.read().state)
    }

    /// Number of accepted actions so far.
    pub fn revision(&self) -> u64 {
        self.current.read().revision
    }

    /// Apply an action and return the resulting snapshot. A rejected action
    /// returns the unchanged snapshot.
    pub fn dispatch(&self, action: Action) -> Arc<TimelineState> {
        match self.try_dispatch(action) {
            Ok(state) => state,
            Err(_) => self.state(),
        }
    }

    /// Apply an action, reporting a rejection instead of swallowing it.
    pub fn try_dispatch(&self, action: Action) -> Result<Arc<TimelineState>, EditError> {
        let kind = action.kind();
        let mut current = self.current.write();
        let next = match self.reducer.try_reduce(&current.state, action) {
            Ok(next) => Arc::new(next),
            Err(err) => {
                debug!(action = kind, %err, "dispatch rejected");
                return Err(err);
            }
        };
        current.state = Arc::clone(&next);
        current.revision += 1;
        let revision = current.revision;

        debug!(action = kind, revision, "dispatch applied");
        // Still under the write lock, so events go out in revision order.
        self.notify(StoreEvent {
            revision,
            action: kind,
        });
        Ok(next)
    }

    /// Receive a [`StoreEvent`] for every accepted action from now on.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    fn notify(&self, event: StoreEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self::new(Reducer::default(), TimelineState::default())
    }
}
