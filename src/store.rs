//! Thread-safe store for the application state snapshot.
//!
//! The store is the only holder of mutable state. Reducer invocations are
//! serialized by the write lock around the read-current / reduce / publish
//! sequence; published snapshots are immutable and can be read concurrently.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::app::{AppAction, AppReducer, AppState};
use crate::mvi::Reducer;

type Observer = Box<dyn Fn(&AppState) + Send + Sync>;

/// Owns the current [`AppState`] snapshot and applies the reducer on each
/// dispatched action.
///
/// Constructed explicitly and passed to whoever needs it; there is no
/// ambient singleton. Cloning the store is cheap and shares the same state.
#[derive(Clone)]
pub struct Store {
    current: Arc<RwLock<AppState>>,
    observers: Arc<Mutex<Vec<Observer>>>,
}

impl Store {
    /// Create a store holding the given initial snapshot.
    pub fn new(initial: AppState) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the current snapshot.
    ///
    /// Cheap relative to reduction; multiple readers can call this
    /// concurrently.
    pub fn state(&self) -> AppState {
        self.current.read().clone()
    }

    /// Apply the reducer to the current snapshot and publish the result.
    ///
    /// At most one reduction computes and commits at a time, even when
    /// actions are dispatched from multiple threads. Observers are notified
    /// with a clone of the published snapshot after the write lock is
    /// released, so they may read `state()` from the callback; they must not
    /// dispatch from inside it (no reentrancy). The observer lock is held
    /// across commit and notification, keeping notification order equal to
    /// commit order.
    pub fn dispatch(&self, action: AppAction) {
        let observers = self.observers.lock();
        let published = {
            let mut guard = self.current.write();
            tracing::trace!(action = action.name(), "dispatch");
            let previous = std::mem::take(&mut *guard);
            *guard = AppReducer::reduce(previous, action);
            (*guard).clone()
        };
        for observer in observers.iter() {
            observer(&published);
        }
    }

    /// Register a callback invoked with every published snapshot.
    pub fn observe(&self, observer: impl Fn(&AppState) + Send + Sync + 'static) {
        self.observers.lock().push(Box::new(observer));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Mode;

    #[test]
    fn dispatch_publishes_reduced_state() {
        let store = Store::default();
        store.dispatch(AppAction::ModeChange(Mode::Private));
        assert_eq!(store.state().mode, Mode::Private);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let clone = store.clone();
        store.dispatch(AppAction::UpdateInactiveExpanded(true));
        assert!(clone.state().inactive_tabs_expanded);
    }
}
