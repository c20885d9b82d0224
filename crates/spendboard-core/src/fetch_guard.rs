//! Stale-response suppression for page fetches
//!
//! Each fetch takes a [`FetchTicket`] from the page's [`FetchGuard`]. Starting
//! a newer fetch or cancelling the guard (page unmount) makes older tickets
//! stale, and their results are dropped instead of applied. Cancellation is
//! cooperative: the request itself still completes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

/// Generation a fetch was started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; every earlier ticket becomes stale
    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { generation }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Invalidate all outstanding tickets
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(&first));

        let second = guard.begin();
        assert!(!guard.is_current(&first));
        assert!(guard.is_current(&second));
    }

    #[test]
    fn test_cancel_invalidates_everything() {
        let guard = FetchGuard::new();
        let ticket = guard.begin();
        guard.cancel();
        assert!(!guard.is_current(&ticket));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = FetchGuard::new();
        let unmount_handle = guard.clone();
        let ticket = guard.begin();

        unmount_handle.cancel();
        assert!(!guard.is_current(&ticket));
    }
}
