//! Pluggable logging seam.
//!
//! The watcher never logs through a global by default: it writes to a
//! [`WatchLogger`] that starts out as [`NoopLogger`], so the crate is usable
//! without any logging configuration. [`TracingLogger`] forwards the seam to
//! the [`tracing`] ecosystem.

use std::fmt;

/// Logging seam used by the watcher.
pub trait WatchLogger: Send + Sync {
    /// Logs an informational message.
    fn info(&self, message: fmt::Arguments<'_>);

    /// Logs a debug message.
    fn debug(&self, message: fmt::Arguments<'_>);
}

impl fmt::Debug for dyn WatchLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WatchLogger")
    }
}

/// A [`WatchLogger`] that drops every message. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl WatchLogger for NoopLogger {
    fn info(&self, _message: fmt::Arguments<'_>) {}

    fn debug(&self, _message: fmt::Arguments<'_>) {}
}

/// A [`WatchLogger`] that forwards to [`tracing`] at the matching levels.
///
/// # Example
///
/// ```ignore
/// let watcher = ConnectionWatcher::new(client);
/// watcher.set_logger(Arc::new(TracingLogger));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl WatchLogger for TracingLogger {
    fn info(&self, message: fmt::Arguments<'_>) {
        tracing::info!("{}", message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!("{}", message);
    }
}
