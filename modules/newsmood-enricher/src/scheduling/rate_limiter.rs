use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

/// Caps dispatches to `capacity` per trailing `window`.
/// A capacity of 0 disables throttling.
pub struct SlidingWindowLimiter {
    capacity: usize,
    window: Duration,
    dispatches: VecDeque<Instant>,
}

impl SlidingWindowLimiter {
    pub fn new(capacity: usize, window: Duration) -> Self {
        Self {
            capacity,
            window,
            dispatches: VecDeque::with_capacity(capacity),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.capacity == 0 || self.window.is_zero()
    }

    /// Wait until another dispatch fits in the window, then record it.
    /// Returns how long the caller was held back.
    pub async fn acquire(&mut self) -> Duration {
        if self.is_disabled() {
            return Duration::ZERO;
        }

        let started = Instant::now();
        self.prune(started);

        if self.dispatches.len() >= self.capacity {
            if let Some(&oldest) = self.dispatches.front() {
                let resume_at = oldest + self.window;
                debug!(
                    wait_ms = resume_at.saturating_duration_since(started).as_millis() as u64,
                    capacity = self.capacity,
                    "Window full, waiting"
                );
                tokio::time::sleep_until(resume_at).await;
            }
        }

        let now = Instant::now();
        self.prune(now);
        self.dispatches.push_back(now);
        now.saturating_duration_since(started)
    }

    /// Dispatches still inside the window.
    pub fn in_window(&self) -> usize {
        self.dispatches.len()
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.dispatches.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                self.dispatches.pop_front();
            } else {
                break;
            }
        }
    }
}
