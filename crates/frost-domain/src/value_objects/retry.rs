//! Retry policy value object

use std::time::Duration;

use crate::constants::{
    RETRY_DEFAULT_BACKOFF_FACTOR, RETRY_DEFAULT_INITIAL_DELAY_MS, RETRY_DEFAULT_MAX_ATTEMPTS,
};

/// Value Object: Exponential Backoff Policy
///
/// Immutable; the executor reads it and keeps no state of its own between
/// calls. The delay before retry `n` (1-based) is
/// `initial_delay * backoff_factor^(n - 1)`, capped at `max_delay` when set.
///
/// ```rust
/// use std::time::Duration;
/// use frost_domain::value_objects::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, 2.0).with_initial_delay(Duration::from_millis(100));
/// assert_eq!(policy.delay_for_retry(1), Duration::from_millis(100));
/// assert_eq!(policy.delay_for_retry(2), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_factor: f64,
    initial_delay: Duration,
    max_delay: Option<Duration>,
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` below 1 and factors below 1.0 are raised
    pub fn new(max_attempts: u32, backoff_factor: f64) -> Self {
        let backoff_factor = if backoff_factor.is_finite() {
            backoff_factor.max(1.0)
        } else {
            RETRY_DEFAULT_BACKOFF_FACTOR
        };
        Self {
            max_attempts: max_attempts.max(1),
            backoff_factor,
            initial_delay: Duration::from_millis(RETRY_DEFAULT_INITIAL_DELAY_MS),
            max_delay: None,
        }
    }

    /// Set the delay before the first retry
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Cap every computed delay
    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Total attempts including the first one
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay multiplier between consecutive retries
    pub fn backoff_factor(&self) -> f64 {
        self.backoff_factor
    }

    /// Delay before the first retry
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Optional upper bound on a single delay
    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay
    }

    /// Delay to wait before retry number `retry` (1-based)
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.initial_delay.as_secs_f64() * self.backoff_factor.powi(exponent);
        let delay = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_DEFAULT_MAX_ATTEMPTS, RETRY_DEFAULT_BACKOFF_FACTOR)
    }
}
