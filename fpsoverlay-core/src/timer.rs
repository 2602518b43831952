//! Clock and sleep capability used by the counting loop
//!
//! [`SystemTimer`] is what the overlay runs on. [`ManualTimer`] replaces wall
//! time with a virtual clock so the loop can be driven deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source plus the sleep the loop suspends on.
pub trait Timer: Send + 'static {
    fn now(&self) -> Instant;

    /// Suspend the calling thread. Must yield, never spin.
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer;

impl Timer for SystemTimer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualTimer {
    base: Instant,
    offset_ns: Arc<AtomicU64>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_ns: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move the clock forward without sleeping.
    pub fn advance(&self, duration: Duration) {
        self.offset_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Virtual time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.offset_ns.load(Ordering::SeqCst))
    }

    pub fn base(&self) -> Instant {
        self.base
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualTimer {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
        std::thread::yield_now();
    }
}
