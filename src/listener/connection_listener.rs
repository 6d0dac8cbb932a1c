//! Domain listener trait for connection events.

use std::fmt;

use crate::error::Result;
use crate::event::ConnectionEvent;

/// A listener for mapped connection events.
///
/// Implementations are invoked from spawned dispatch tasks, one task per
/// published event. A returned error is routed to the watcher's
/// unhandled-error listeners and never affects the remaining listeners.
///
/// Deliveries from different publications are not ordered relative to each
/// other; use a version obtained from the coordination service, not arrival
/// order, to sequence reactions.
///
/// # Example
///
/// ```ignore
/// struct CacheInvalidator;
///
/// impl ConnectionEventListener for CacheInvalidator {
///     fn connection_event(&self, event: ConnectionEvent) -> Result<()> {
///         if event == ConnectionEvent::Lost {
///             self.invalidate_all();
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait ConnectionEventListener: Send + Sync {
    /// Called once per published event.
    fn connection_event(&self, event: ConnectionEvent) -> Result<()>;
}

impl fmt::Debug for dyn ConnectionEventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConnectionEventListener")
    }
}

/// A [`ConnectionEventListener`] backed by a closure.
///
/// ```ignore
/// let listener = FnConnectionListener::new(|event| {
///     println!("connection event: {event}");
///     Ok(())
/// });
/// let id = watcher.listenable().add(Arc::new(listener));
/// ```
pub struct FnConnectionListener {
    callback: Box<dyn Fn(ConnectionEvent) -> Result<()> + Send + Sync>,
}

impl FnConnectionListener {
    /// Wraps a closure as a listener.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(ConnectionEvent) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl ConnectionEventListener for FnConnectionListener {
    fn connection_event(&self, event: ConnectionEvent) -> Result<()> {
        (self.callback)(event)
    }
}

impl fmt::Debug for FnConnectionListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnConnectionListener")
    }
}
