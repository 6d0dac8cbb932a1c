//! Connection-state event adapter for ZooKeeper-style ensemble session clients.
//!
//! A session client reports low-level connection transitions (suspended,
//! lost, reconnected, connected). This crate wraps one such client behind a
//! [`ConnectionWatcher`] that translates those transitions into a small,
//! stable vocabulary of [`ConnectionEvent`]s, fans each event out to
//! registered listeners on independently spawned tasks, isolates listener
//! failures from the dispatch path and from each other, and tracks a
//! one-time [`ConnectionEvent::Initialized`] milestone over the outstanding
//! startup work.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use zk_connwatch::{ConnectionWatcher, FnConnectionListener};
//!
//! // `client` is any ensemble session client implementing `EnsembleClient`.
//! let watcher = ConnectionWatcher::new(client);
//!
//! watcher.listenable().add(Arc::new(FnConnectionListener::new(|event| {
//!     println!("connection event: {event}");
//!     Ok(())
//! })));
//!
//! watcher.start()?;
//! ```
//!
//! # Delivery Semantics
//!
//! Each publication is dispatched on its own Tokio task. Listeners added or
//! removed mid-dispatch do not affect an in-flight fan-out, and a slow
//! listener cannot stall delivery of the next raw transition. No ordering is
//! guaranteed between two publications; callers needing ordering must rely
//! on a version or sequence obtained from the coordination service itself.
//!
//! Failures returned by domain listeners are delivered to every registered
//! [`UnhandledErrorListener`], or written to the [`WatchLogger`] seam when
//! none are registered. The seam defaults to [`NoopLogger`];
//! [`TracingLogger`] plugs it into the `tracing` ecosystem.

pub mod error;
pub mod event;
pub mod lifecycle;
pub mod listener;
pub mod logging;
pub mod session;
pub mod watcher;

mod init;

pub use error::{Result, WatchError};
pub use event::ConnectionEvent;
pub use lifecycle::WatcherState;
pub use listener::{
    ConnectionEventListener, DispatchStats, FnConnectionListener, FnErrorListener,
    ListenerContainer, ListenerId, UnhandledErrorListener,
};
pub use logging::{NoopLogger, TracingLogger, WatchLogger};
pub use session::{EnsembleClient, SessionState, SessionStateListener};
pub use watcher::ConnectionWatcher;
