//! Error types for watcher operations.

use thiserror::Error;

/// The main error type for watcher operations.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The watcher was asked to start while already started or stopped.
    #[error("already started")]
    AlreadyStarted,

    /// The watcher was asked to stop without having been started.
    #[error("not started")]
    NotStarted,

    /// A failure produced by a domain listener during dispatch.
    #[error("listener error: {0}")]
    Listener(String),
}

impl WatchError {
    /// Creates a listener failure from any displayable cause.
    pub fn listener(cause: impl std::fmt::Display) -> Self {
        Self::Listener(cause.to_string())
    }
}

/// A specialized `Result` type for watcher operations.
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_started_display() {
        assert_eq!(WatchError::AlreadyStarted.to_string(), "already started");
    }

    #[test]
    fn test_not_started_display() {
        assert_eq!(WatchError::NotStarted.to_string(), "not started");
    }

    #[test]
    fn test_listener_error_display() {
        let err = WatchError::Listener("handler refused event".to_string());
        assert_eq!(err.to_string(), "listener error: handler refused event");
    }

    #[test]
    fn test_listener_constructor() {
        let err = WatchError::listener("boom");
        assert!(matches!(err, WatchError::Listener(ref msg) if msg == "boom"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WatchError>();
    }
}
