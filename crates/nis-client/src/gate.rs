use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::trace;

use crate::error::ClientError;

// ==============================================================================
// Concurrency Gate
// ==============================================================================

/// Bounds how many async requests may be in flight at once.
///
/// Backed by `tokio::sync::Semaphore`, which admits waiters in FIFO order.
/// A permit is held for the whole transport call and returned when it
/// finishes, whether it succeeded or failed.
#[derive(Debug)]
pub struct ConcurrencyGate {
    semaphore: Semaphore,
    capacity: usize,
}

impl ConcurrencyGate {
    pub fn new(capacity: usize) -> Result<Self, ClientError> {
        if capacity == 0 {
            return Err(ClientError::InvalidConfig(
                "max_concurrency must be at least 1".to_owned(),
            ));
        }
        if capacity > Semaphore::MAX_PERMITS {
            return Err(ClientError::InvalidConfig(format!(
                "max_concurrency must be at most {}",
                Semaphore::MAX_PERMITS
            )));
        }
        Ok(Self {
            semaphore: Semaphore::new(capacity),
            capacity,
        })
    }

    pub async fn acquire(&self) -> Result<SemaphorePermit<'_>, ClientError> {
        if self.semaphore.available_permits() == 0 {
            trace!(capacity = self.capacity, "concurrency gate full; queueing");
        }
        self.semaphore.acquire().await.map_err(|_| ClientError::Closed)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn in_flight(&self) -> usize {
        self.capacity - self.available()
    }

    /// Reject all waiting and future acquisitions. Permits already held stay
    /// valid until dropped.
    pub fn close(&self) {
        self.semaphore.close();
    }

    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }
}
