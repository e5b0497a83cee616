//! Cooperative cancellation for long range scans.
//!
//! A [`CancellationToken`] is cloned into every worker. Workers poll it every
//! `check_interval` numbers and stop once it reports [`Interrupt::Cancelled`]
//! or [`Interrupt::Expired`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interrupt {
    #[default]
    Continue,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop_flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall-clock budget starting now.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.deadline = Instant::now().checked_add(limit);
        self
    }

    pub fn cancel(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }

    #[inline]
    #[must_use]
    pub fn poll(&self) -> Interrupt {
        if self.is_cancelled() {
            return Interrupt::Cancelled;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Interrupt::Expired,
            _ => Interrupt::Continue,
        }
    }
}
