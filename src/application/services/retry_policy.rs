use std::time::Duration;

const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

/// Exponential backoff between attempts of a provider call.
///
/// The first attempt runs immediately; attempt `n` (n >= 2) waits
/// `base_delay * 2^(n - 2)`, capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(base_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }

    /// Delay to wait before the 1-based `attempt`, `None` for the first one.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt <= 1 {
            return None;
        }
        Some(self.exponential_delay(attempt - 2))
    }

    fn exponential_delay(&self, n_past_retries: u32) -> Duration {
        let exponent = i32::try_from(n_past_retries).unwrap_or(i32::MAX);
        let delay = self.base_delay.as_secs_f64() * 2_f64.powi(exponent);
        Duration::from_secs_f64(delay.min(self.max_delay.as_secs_f64()))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY)
    }
}
