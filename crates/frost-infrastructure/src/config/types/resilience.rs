//! Resilience configuration types

use std::time::Duration;

use frost_domain::constants::{
    RETRY_DEFAULT_BACKOFF_FACTOR, RETRY_DEFAULT_INITIAL_DELAY_MS, RETRY_DEFAULT_MAX_ATTEMPTS,
};
use frost_domain::value_objects::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Retry settings for document store operations
///
/// Defaults: 3 attempts in total, 1 second before the first retry, doubling
/// after that, no cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceConfig {
    /// Total attempts including the first
    pub max_attempts: u32,
    /// Delay multiplier between retries
    pub backoff_factor: f64,
    /// Delay before the first retry in milliseconds
    pub initial_delay_ms: u64,
    /// Upper bound on a single delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay_ms: Option<u64>,
}

impl ResilienceConfig {
    /// Build the executor's retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::new(self.max_attempts, self.backoff_factor)
            .with_initial_delay(Duration::from_millis(self.initial_delay_ms));
        match self.max_delay_ms {
            Some(max) => policy.with_max_delay(Duration::from_millis(max)),
            None => policy,
        }
    }
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_DEFAULT_MAX_ATTEMPTS,
            backoff_factor: RETRY_DEFAULT_BACKOFF_FACTOR,
            initial_delay_ms: RETRY_DEFAULT_INITIAL_DELAY_MS,
            max_delay_ms: None,
        }
    }
}
