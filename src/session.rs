//! Boundary traits for the ensemble session client.
//!
//! The watcher consumes a session client through [`EnsembleClient`]; session
//! management, retries and ensemble connection handling all belong to the
//! implementor. The watcher registers exactly one [`SessionStateListener`]
//! at start and never removes it.

use std::fmt;
use std::sync::Arc;

/// Raw connection states emitted by an ensemble session client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The initial connection to the ensemble has been established.
    Connected,
    /// The connection has been interrupted; the session may still recover.
    Suspended,
    /// The connection has been re-established after an interruption.
    Reconnected,
    /// The session has expired and cannot recover.
    Lost,
    /// The client is connected to a read-only ensemble member.
    ///
    /// Not translated into a connection event; observed transitions are
    /// debug-logged and dropped.
    ReadOnly,
}

impl SessionState {
    /// Returns a human-readable name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "CONNECTED",
            Self::Suspended => "SUSPENDED",
            Self::Reconnected => "RECONNECTED",
            Self::Lost => "LOST",
            Self::ReadOnly => "READ_ONLY",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Callback for raw session-state transitions.
///
/// Implementations are invoked on the client's delivery task and must not
/// block; the watcher's own implementation hands the state off to a spawned
/// dispatch task immediately.
pub trait SessionStateListener: Send + Sync {
    /// Called for every session-state transition the client observes.
    fn session_state_changed(&self, state: SessionState);
}

impl fmt::Debug for dyn SessionStateListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionStateListener")
    }
}

/// The subscription surface of a ZooKeeper-style session client.
///
/// # Example
///
/// ```ignore
/// struct MyClient { /* ensemble connection handling */ }
///
/// impl EnsembleClient for MyClient {
///     fn add_session_listener(&self, listener: Arc<dyn SessionStateListener>) {
///         self.state_listeners.lock().push(listener);
///     }
/// }
/// ```
pub trait EnsembleClient: Send + Sync {
    /// Registers a listener for raw session-state transitions.
    ///
    /// Listeners registered here stay registered for the lifetime of the
    /// client.
    fn add_session_listener(&self, listener: Arc<dyn SessionStateListener>);
}

impl fmt::Debug for dyn EnsembleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnsembleClient")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_names() {
        assert_eq!(SessionState::Connected.name(), "CONNECTED");
        assert_eq!(SessionState::Suspended.name(), "SUSPENDED");
        assert_eq!(SessionState::Reconnected.name(), "RECONNECTED");
        assert_eq!(SessionState::Lost.name(), "LOST");
        assert_eq!(SessionState::ReadOnly.name(), "READ_ONLY");
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::ReadOnly.to_string(), "READ_ONLY");
        assert_eq!(SessionState::Lost.to_string(), "LOST");
    }

    #[test]
    fn test_session_state_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<SessionState>();
    }

    #[test]
    fn test_listener_trait_object_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionStateListener>();
        assert_send_sync::<dyn EnsembleClient>();
    }
}
