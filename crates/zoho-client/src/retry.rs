//! Inter-page delay schedule.

use std::time::Duration;

/// Growth factor of the inter-page delay.
pub const PAGE_DELAY_FACTOR: f64 = 1.5;

/// Upper bound on any single inter-page delay.
pub const MAX_PAGE_DELAY: Duration = Duration::from_secs(10);

/// Fixed delay schedule for the requests of one pagination loop.
///
/// Request `n` (0-indexed) waits `min(base * 1.5^(n-1), 10s)`; the first
/// request never waits. The schedule does not adapt to server feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitSchedule {
    base: Duration,
    cap: Duration,
}

impl RateLimitSchedule {
    /// Create a schedule seeded from `base`.
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            cap: MAX_PAGE_DELAY,
        }
    }

    /// Delay to apply before request `request_index`, if any.
    pub fn delay_before(&self, request_index: u32) -> Option<Duration> {
        if request_index == 0 {
            return None;
        }
        let exponent = (request_index - 1).min(i32::MAX as u32) as i32;
        let secs = self.base.as_secs_f64() * PAGE_DELAY_FACTOR.powi(exponent);
        if secs.is_finite() && secs < self.cap.as_secs_f64() {
            Some(Duration::from_secs_f64(secs))
        } else {
            Some(self.cap)
        }
    }
}
