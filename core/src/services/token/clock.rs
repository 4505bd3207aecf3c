//! Time source for token issuance and expiry checks

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

/// Source of the current time in epoch seconds
///
/// Each lifecycle operation samples the clock once and uses that instant for every
/// check it performs.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually driven clock for tests and simulations
///
/// Clones share the same instant, so a clock handed to the token service and the
/// store can be advanced from the test body.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(start)),
        }
    }

    /// Start at the current wall clock time
    pub fn starting_now() -> Self {
        Self::new(Utc::now().timestamp())
    }

    /// Move the clock forward by `seconds`
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(100);
        let shared = clock.clone();

        clock.advance(16);
        assert_eq!(shared.now(), 116);

        shared.set(5);
        assert_eq!(clock.now(), 5);
    }

    #[test]
    fn test_system_clock_is_close_to_chrono() {
        let diff = (SystemClock.now() - Utc::now().timestamp()).abs();
        assert!(diff <= 1);
    }
}
