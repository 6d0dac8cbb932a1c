//! Tracking of outstanding startup work and the one-time initialized milestone.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Counts outstanding background operations and arms the one-time
/// `Initialized` milestone.
///
/// The milestone is earned by the completion that returns the count to zero,
/// provided at least one operation was begun. Once earned it stays armed
/// until [`reset`](Self::reset) disarms it; only a session-lost transition
/// does that, so a rebuilt session can earn the milestone again.
#[derive(Debug, Default)]
pub(crate) struct InitializationTracker {
    outstanding: AtomicU64,
    initialized: AtomicBool,
}

impl InitializationTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the start of one background operation.
    pub(crate) fn begin(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Records the completion of one background operation.
    ///
    /// Returns `true` for exactly one caller per armed cycle: the one whose
    /// decrement brings the count to zero while the milestone is unarmed.
    /// A completion with no matching begin is ignored.
    pub(crate) fn end(&self) -> bool {
        let mut observed = self.outstanding.load(Ordering::Acquire);
        loop {
            if observed == 0 {
                return false;
            }
            match self.outstanding.compare_exchange_weak(
                observed,
                observed - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(current) => observed = current,
            }
        }

        observed == 1
            && self
                .initialized
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
    }

    /// Disarms the milestone so a later begin/end cycle can earn it again.
    pub(crate) fn reset(&self) {
        self.initialized.store(false, Ordering::Release);
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}
