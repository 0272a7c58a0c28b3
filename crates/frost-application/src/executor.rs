//! Retrying executor for document store operations
//!
//! Every store access made by the search core goes through
//! [`RetryingExecutor::execute`]. The executor re-runs an operation on
//! retryable failures with exponential backoff and stops as soon as the
//! caller's cancellation token fires.
//!
//! Operations may run more than once, so they must be idempotent
//! (upsert rather than insert).

use std::future::Future;
use std::sync::Arc;

use frost_domain::error::{Error, Result};
use frost_domain::ports::SharedDocumentStore;
use frost_domain::value_objects::RetryPolicy;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Runs store operations with bounded retry
///
/// Holds nothing but the store handle and an immutable policy, so one
/// instance can serve any number of concurrent, independent operations.
#[derive(Clone)]
pub struct RetryingExecutor {
    store: SharedDocumentStore,
    policy: RetryPolicy,
}

impl RetryingExecutor {
    /// Create an executor over a store
    pub fn new(store: SharedDocumentStore, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// The retry policy in effect
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Name of the wrapped store
    pub fn store_name(&self) -> &str {
        self.store.provider_name()
    }

    /// Run `operation` against the store, retrying transient failures
    ///
    /// - Cancellation is checked before every attempt and during backoff;
    ///   an attempt that is already running is never interrupted.
    /// - Non-retryable errors (see [`Error::is_retryable`]) return at once.
    /// - After `max_attempts` failures the last error is returned wrapped in
    ///   [`Error::RetriesExhausted`].
    pub async fn execute<T, F, Fut>(&self, cancel: &CancellationToken, operation: F) -> Result<T>
    where
        F: Fn(SharedDocumentStore) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.policy.max_attempts();
        let mut attempt: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                debug!(attempt, "Cancellation observed before store operation");
                return Err(Error::Aborted);
            }
            attempt += 1;

            let error = match operation(Arc::clone(&self.store)).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if !error.is_retryable() {
                return Err(error);
            }
            if attempt >= max_attempts {
                warn!(
                    store = self.store.provider_name(),
                    attempts = attempt,
                    error = %error,
                    "Store operation failed, retries exhausted"
                );
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    source: Box::new(error),
                });
            }

            let delay = self.policy.delay_for_retry(attempt);
            warn!(
                store = self.store.provider_name(),
                attempt,
                max_attempts,
                backoff_ms = delay.as_millis() as u64,
                error = %error,
                "Store operation failed, retrying"
            );

            tokio::select! {
                () = cancel.cancelled() => return Err(Error::Aborted),
                () = tokio::time::sleep(delay) => {}
            }
        }
    }
}
