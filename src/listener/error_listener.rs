//! Listener trait for failures raised during dispatch.

use std::fmt;

use crate::error::WatchError;

/// A listener for failures raised by domain listeners.
///
/// Registering at least one of these centralizes failure handling: every
/// listener-produced error is delivered here instead of the logging seam.
pub trait UnhandledErrorListener: Send + Sync {
    /// Called with each failure a domain listener produced.
    fn unhandled_error(&self, error: &WatchError);
}

impl fmt::Debug for dyn UnhandledErrorListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnhandledErrorListener")
    }
}

/// An [`UnhandledErrorListener`] backed by a closure.
pub struct FnErrorListener {
    callback: Box<dyn Fn(&WatchError) + Send + Sync>,
}

impl FnErrorListener {
    /// Wraps a closure as an error listener.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&WatchError) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl UnhandledErrorListener for FnErrorListener {
    fn unhandled_error(&self, error: &WatchError) {
        (self.callback)(error)
    }
}

impl fmt::Debug for FnErrorListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnErrorListener")
    }
}
