//! Watcher lifecycle state machine.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle states of a [`ConnectionWatcher`](crate::ConnectionWatcher).
///
/// The only legal path is `NotStarted` to `Started` to `Stopped`, each edge
/// taken exactly once. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WatcherState {
    /// Created but not yet subscribed to the session client.
    NotStarted = 0,
    /// Subscribed and publishing events.
    Started = 1,
    /// No longer publishing; terminal.
    Stopped = 2,
}

impl WatcherState {
    /// Returns a human-readable name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Started => "STARTED",
            Self::Stopped => "STOPPED",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::NotStarted,
            1 => Self::Started,
            _ => Self::Stopped,
        }
    }
}

impl fmt::Display for WatcherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Atomic cell holding a [`WatcherState`].
///
/// [`transition`](Self::transition) is a compare-and-swap: it succeeds only
/// when the current state equals `from`, so concurrent callers race for
/// exactly one successful edge.
#[derive(Debug)]
pub(crate) struct Lifecycle(AtomicU8);

impl Lifecycle {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(WatcherState::NotStarted as u8))
    }

    pub(crate) fn current(&self) -> WatcherState {
        WatcherState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Attempts the `from -> to` edge; returns whether this caller won it.
    pub(crate) fn transition(&self, from: WatcherState, to: WatcherState) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn is_started(&self) -> bool {
        self.current() == WatcherState::Started
    }
}
