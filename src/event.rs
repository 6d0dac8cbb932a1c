//! Connection event vocabulary published to domain listeners.

use std::fmt;

/// Events emitted when the session's connection lifecycle changes.
///
/// These are the stable, application-facing translation of the raw
/// [`SessionState`](crate::session::SessionState) transitions reported by
/// the ensemble client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionEvent {
    /// The connection to the ensemble has been suspended.
    Suspended,
    /// The connection has been re-established after a suspension.
    Reconnected,
    /// The session has been lost and must be rebuilt.
    Lost,
    /// The initial connection to the ensemble has been established.
    Connected,
    /// Initial background work has completed for the current session.
    ///
    /// Published at most once per session; losing the session re-arms it.
    Initialized,
}

impl ConnectionEvent {
    /// Returns a human-readable name for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Suspended => "SUSPENDED",
            Self::Reconnected => "RECONNECTED",
            Self::Lost => "LOST",
            Self::Connected => "CONNECTED",
            Self::Initialized => "INITIALIZED",
        }
    }
}

impl fmt::Display for ConnectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
