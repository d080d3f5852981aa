//! Cooperative cancellation
//!
//! A single shared boolean the hosting UI sets when the user aborts a job
//! watch. The poll loop reads it once per iteration; no other mutable state
//! crosses tasks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable cancellation handle shared between the poll loop and its owner
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    inner: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// Creates a flag in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; observed at the next loop iteration
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns true once `cancel` has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
