//! The connection watcher: maps raw session states into connection events
//! and fans them out to registered listeners.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::error::{Result, WatchError};
use crate::event::ConnectionEvent;
use crate::init::InitializationTracker;
use crate::lifecycle::{Lifecycle, WatcherState};
use crate::listener::{
    ConnectionEventListener, DispatchStats, ListenerContainer, UnhandledErrorListener,
};
use crate::logging::{NoopLogger, WatchLogger};
use crate::session::{EnsembleClient, SessionState, SessionStateListener};

/// Adapts an [`EnsembleClient`]'s raw session-state transitions into
/// [`ConnectionEvent`]s delivered to registered listeners.
///
/// Each published event is fanned out on its own spawned task, so a slow
/// listener never stalls delivery of the next raw transition. The flip side
/// is that two events may reach listeners out of the order their transitions
/// occurred in; callers that need ordering must use a version or sequence
/// obtained from the coordination service, not arrival order.
///
/// Listener failures are delivered to the error listeners registered via
/// [`error_listenable`](Self::error_listenable), or written to the logging
/// seam when none are registered. They never terminate dispatch and never
/// reach other listeners.
///
/// Requires a running Tokio runtime once started: dispatch tasks are spawned
/// with [`tokio::spawn`].
///
/// # Example
///
/// ```ignore
/// let watcher = ConnectionWatcher::new(client);
///
/// let id = watcher.listenable().add(Arc::new(FnConnectionListener::new(|event| {
///     println!("connection event: {event}");
///     Ok(())
/// })));
///
/// watcher.start()?;
/// // ...
/// watcher.listenable().remove(id);
/// ```
pub struct ConnectionWatcher {
    inner: Arc<WatcherInner>,
}

struct WatcherInner {
    client: Arc<dyn EnsembleClient>,
    listeners: ListenerContainer<dyn ConnectionEventListener>,
    error_listeners: ListenerContainer<dyn UnhandledErrorListener>,
    lifecycle: Lifecycle,
    tracker: InitializationTracker,
    stats: DispatchStats,
    logger: RwLock<Arc<dyn WatchLogger>>,
}

/// Forwards raw state changes from the client into the watcher.
///
/// Holds a weak reference so the client's listener registration cannot keep
/// the watcher alive on its own.
struct StateChangeForwarder {
    inner: Weak<WatcherInner>,
}

impl SessionStateListener for StateChangeForwarder {
    fn session_state_changed(&self, state: SessionState) {
        if let Some(inner) = self.inner.upgrade() {
            inner.handle_state_change(state);
        }
    }
}

impl ConnectionWatcher {
    /// Creates a watcher for the given client.
    ///
    /// The watcher observes nothing until [`start`](Self::start) is called.
    pub fn new(client: Arc<dyn EnsembleClient>) -> Self {
        Self {
            inner: Arc::new(WatcherInner {
                client,
                listeners: ListenerContainer::new(),
                error_listeners: ListenerContainer::new(),
                lifecycle: Lifecycle::new(),
                tracker: InitializationTracker::new(),
                stats: DispatchStats::new(),
                logger: RwLock::new(Arc::new(NoopLogger) as Arc<dyn WatchLogger>),
            }),
        }
    }

    /// Starts the watcher, subscribing it to the client's session-state
    /// transitions.
    ///
    /// Succeeds exactly once; every later call returns
    /// [`WatchError::AlreadyStarted`]. The subscription installed here is
    /// never removed.
    pub fn start(&self) -> Result<()> {
        if !self
            .inner
            .lifecycle
            .transition(WatcherState::NotStarted, WatcherState::Started)
        {
            return Err(WatchError::AlreadyStarted);
        }

        let forwarder = Arc::new(StateChangeForwarder {
            inner: Arc::downgrade(&self.inner),
        });
        self.inner.client.add_session_listener(forwarder);
        Ok(())
    }

    /// Stops the watcher; from here on every publish is a no-op.
    ///
    /// Fan-out tasks already spawned run to completion. Returns
    /// [`WatchError::NotStarted`] unless the watcher is currently started.
    pub fn stop(&self) -> Result<()> {
        if !self
            .inner
            .lifecycle
            .transition(WatcherState::Started, WatcherState::Stopped)
        {
            return Err(WatchError::NotStarted);
        }
        Ok(())
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> WatcherState {
        self.inner.lifecycle.current()
    }

    /// Replaces the logging seam. Chainable.
    pub fn set_logger(&self, logger: Arc<dyn WatchLogger>) -> &Self {
        *self.inner.logger.write() = logger;
        self
    }

    /// Returns the registry of domain-event listeners.
    pub fn listenable(&self) -> &ListenerContainer<dyn ConnectionEventListener> {
        &self.inner.listeners
    }

    /// Returns the registry of unhandled-error listeners.
    pub fn error_listenable(&self) -> &ListenerContainer<dyn UnhandledErrorListener> {
        &self.inner.error_listeners
    }

    /// Returns dispatch counters.
    pub fn stats(&self) -> &DispatchStats {
        &self.inner.stats
    }

    /// Records the start of one unit of initial background work.
    pub fn begin_operation(&self) {
        self.inner.tracker.begin();
    }

    /// Records the completion of one unit of initial background work.
    ///
    /// The completion that returns the outstanding count to zero publishes
    /// the one-time [`ConnectionEvent::Initialized`] milestone. The
    /// milestone re-arms only when the session is lost.
    pub fn complete_operation(&self) {
        if self.inner.tracker.end() {
            Arc::clone(&self.inner).publish(ConnectionEvent::Initialized);
        }
    }
}

impl fmt::Debug for ConnectionWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionWatcher")
            .field("state", &self.inner.lifecycle.current())
            .field("listeners", &self.inner.listeners.len())
            .field("error_listeners", &self.inner.error_listeners.len())
            .finish()
    }
}

impl WatcherInner {
    fn handle_state_change(self: Arc<Self>, state: SessionState) {
        match state {
            SessionState::Suspended => {
                self.debug(format_args!("session state: {state}"));
                self.publish(ConnectionEvent::Suspended);
            }
            SessionState::Lost => {
                self.debug(format_args!("session state: {state}"));
                // A rebuilt session must re-earn the initialized milestone.
                self.tracker.reset();
                self.publish(ConnectionEvent::Lost);
            }
            SessionState::Connected => {
                self.debug(format_args!("session state: {state}"));
                self.publish(ConnectionEvent::Connected);
            }
            SessionState::Reconnected => {
                self.debug(format_args!("session state: {state}"));
                self.publish(ConnectionEvent::Reconnected);
            }
            other => {
                self.debug(format_args!("unmapped session state: {other}"));
            }
        }
    }

    /// Publishes one event to every registered listener on its own task.
    ///
    /// A no-op unless the watcher is started.
    fn publish(self: Arc<Self>, event: ConnectionEvent) {
        if !self.lifecycle.is_started() {
            return;
        }

        self.debug(format_args!("publishing event: {event}"));
        self.stats.record_event();

        tokio::spawn(async move {
            self.call_listeners(event);
        });
    }

    /// Invokes every listener in the publish-time snapshot. A failure goes
    /// to escalation; the remaining listeners still run.
    fn call_listeners(&self, event: ConnectionEvent) {
        for listener in self.listeners.snapshot() {
            if let Err(err) = listener.connection_event(event) {
                self.handle_listener_error(err);
            }
        }
    }

    /// Delivers a listener failure to every error listener, or writes it to
    /// the logging seam when none are registered.
    fn handle_listener_error(&self, err: WatchError) {
        self.stats.record_error();

        let error_listeners = self.error_listeners.snapshot();
        if error_listeners.is_empty() {
            self.info(format_args!("{err}"));
            return;
        }
        for listener in error_listeners {
            listener.unhandled_error(&err);
        }
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.logger.read().info(message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.logger.read().debug(message);
    }
}
