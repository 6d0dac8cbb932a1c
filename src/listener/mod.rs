//! Listener registration and dispatch infrastructure.

mod connection_listener;
mod error_listener;

pub use connection_listener::{ConnectionEventListener, FnConnectionListener};
pub use error_listener::{FnErrorListener, UnhandledErrorListener};

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

/// Unique identifier for a listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    /// Creates a new unique listener ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// A concurrency-safe registry of listeners keyed by [`ListenerId`].
///
/// Dispatch iterates over a point-in-time [`snapshot`](Self::snapshot), so a
/// listener added or removed mid-dispatch does not affect an in-flight
/// fan-out, and no lock is held across any listener invocation.
pub struct ListenerContainer<L: ?Sized> {
    listeners: RwLock<HashMap<ListenerId, Arc<L>>>,
}

impl<L: ?Sized> ListenerContainer<L> {
    pub(crate) fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a listener, returning the ID that removes it.
    pub fn add(&self, listener: Arc<L>) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.write().insert(id, listener);
        id
    }

    /// Removes a previously added listener.
    ///
    /// Removing an ID that is not present is a no-op. Returns whether a
    /// listener was removed.
    pub fn remove(&self, id: ListenerId) -> bool {
        self.listeners.write().remove(&id).is_some()
    }

    /// Returns the listeners registered at this instant.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.listeners.read().values().cloned().collect()
    }

    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// Returns `true` if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerContainer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerContainer")
            .field("len", &self.len())
            .finish()
    }
}

/// Counters describing dispatch activity.
#[derive(Debug, Default)]
pub struct DispatchStats {
    events_published: AtomicU64,
    listener_errors: AtomicU64,
}

impl DispatchStats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_event(&self) {
        self.events_published.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_error(&self) {
        self.listener_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of events accepted for publication.
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }

    /// Returns the number of listener failures observed during dispatch.
    pub fn listener_errors(&self) -> u64 {
        self.listener_errors.load(Ordering::Relaxed)
    }
}
