//! Shared helpers for watcher integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use zk_connwatch::{
    ConnectionEvent, ConnectionEventListener, EnsembleClient, SessionState, SessionStateListener,
    UnhandledErrorListener, WatchError, WatchLogger,
};

/// An in-process ensemble client: records subscriptions and lets tests fire
/// raw session states at them.
#[derive(Default)]
pub struct MockEnsembleClient {
    listeners: Mutex<Vec<Arc<dyn SessionStateListener>>>,
}

impl MockEnsembleClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of state listeners registered so far.
    pub fn subscription_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Delivers a raw session state to every registered listener.
    pub fn fire(&self, state: SessionState) {
        let listeners: Vec<_> = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener.session_state_changed(state);
        }
    }
}

impl EnsembleClient for MockEnsembleClient {
    fn add_session_listener(&self, listener: Arc<dyn SessionStateListener>) {
        self.listeners.lock().unwrap().push(listener);
    }
}

/// Records every event it receives.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ConnectionEvent>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ConnectionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_of(&self, event: ConnectionEvent) -> usize {
        self.events.lock().unwrap().iter().filter(|e| **e == event).count()
    }
}

impl ConnectionEventListener for RecordingListener {
    fn connection_event(&self, event: ConnectionEvent) -> zk_connwatch::Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Fails every invocation, counting how often it was called.
#[derive(Default)]
pub struct FailingListener {
    invocations: AtomicU32,
}

impl FailingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn invocations(&self) -> u32 {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl ConnectionEventListener for FailingListener {
    fn connection_event(&self, event: ConnectionEvent) -> zk_connwatch::Result<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Err(WatchError::listener(format!("cannot handle {event}")))
    }
}

/// Records every failure delivered to it.
#[derive(Default)]
pub struct RecordingErrorListener {
    errors: Mutex<Vec<String>>,
}

impl RecordingErrorListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl UnhandledErrorListener for RecordingErrorListener {
    fn unhandled_error(&self, error: &WatchError) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

/// Captures seam output so tests can assert on what was logged.
#[derive(Default)]
pub struct RecordingLogger {
    info_messages: Mutex<Vec<String>>,
    debug_messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn info_messages(&self) -> Vec<String> {
        self.info_messages.lock().unwrap().clone()
    }

    pub fn debug_messages(&self) -> Vec<String> {
        self.debug_messages.lock().unwrap().clone()
    }
}

impl WatchLogger for RecordingLogger {
    fn info(&self, message: std::fmt::Arguments<'_>) {
        self.info_messages.lock().unwrap().push(message.to_string());
    }

    fn debug(&self, message: std::fmt::Arguments<'_>) {
        self.debug_messages.lock().unwrap().push(message.to_string());
    }
}

/// Polls `predicate` until it holds or two seconds elapse; returns whether
/// it held.
pub async fn wait_until(predicate: impl Fn() -> bool) -> bool {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !predicate() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .is_ok()
}

/// Gives already-spawned dispatch tasks a chance to run before asserting
/// that nothing was delivered.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
