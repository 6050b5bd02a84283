//! Fixed-window request limiter keyed by client address.
//!
//! One window per address: the first request opens it, subsequent requests
//! increment the counter, and the window resets once it has elapsed. The
//! clock is injectable so tests can drive window rollover directly.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sweep expired windows once the table grows past this many addresses,
/// bounding memory under address churn.
const SWEEP_THRESHOLD: usize = 1024;

/// Time source for the limiter.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time, used in production.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed)
    }
}

#[derive(Debug)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Per-address fixed-window counter.
///
/// A single mutex guards the table; each check performs exactly one counter
/// update, so concurrent bursts from one address cannot undercount. The lock
/// is never held across I/O.
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    clock: Box<dyn Clock>,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self::with_clock(window, max_requests, Box::new(SystemClock))
    }

    pub fn with_clock(window: Duration, max_requests: u32, clock: Box<dyn Clock>) -> Self {
        Self {
            window,
            max_requests,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request from `addr` and decide whether it may proceed.
    pub fn check(&self, addr: &str) -> RateDecision {
        let now = self.clock.now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        if windows.len() >= SWEEP_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started_at) < window);
        }

        let entry = windows.entry(addr.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started_at);
            return RateDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        entry.count += 1;
        RateDecision::Allowed
    }

    /// Number of addresses currently tracked.
    pub fn tracked_addresses(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}
