//! Concurrency limiting for fetch tasks
//!
//! A fetch may only begin network I/O while holding a permit; the permit
//! releases its slot when dropped, on every exit path. Admission order is
//! whatever the semaphore provides; no caller is starved while slots are
//! free.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Caps the number of fetches in the network-I/O phase at a fixed maximum
#[derive(Debug, Clone)]
pub struct FetchLimiter {
    permits: Arc<Semaphore>,
}

impl FetchLimiter {
    /// Creates a limiter admitting at most `max_in_flight` concurrent holders
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight)),
        }
    }

    /// Waits for a free slot and returns its permit
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        // The semaphore is never closed, so acquisition cannot fail.
        self.permits
            .clone()
            .acquire_owned()
            .await
            .expect("fetch limiter semaphore closed")
    }

    /// Number of slots not currently held
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}
