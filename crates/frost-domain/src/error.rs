//! Error handling types
//!
//! Every failure in the search core is one of a small set of kinds. Whether a
//! kind may be retried is a property of the kind itself (see
//! [`Error::is_retryable`]), so the retrying executor never has to guess from
//! where an error was raised.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the `*_with_source` variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Frost search core
#[derive(Error, Debug)]
pub enum Error {
    /// Caller input rejected before reaching the core
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// Embedding provider failure (auth, rate limit, network, bad payload)
    #[error("Embedding provider error: {message}")]
    Provider {
        /// Description of the provider failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Document/embedding store failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Cancellation was observed at a suspension point
    #[error("Operation aborted")]
    Aborted,

    /// The retrying executor gave up; wraps the last underlying failure
    #[error("Retries exhausted after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts performed
        attempts: u32,
        /// Failure of the final attempt
        #[source]
        source: Box<Error>,
    },

    /// A vector does not match the provider's fixed dimensionality
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality reported by the provider
        expected: usize,
        /// Length of the offending vector
        actual: usize,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Basic error creation methods
impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding provider error with source
    pub fn provider_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether the retrying executor may run the operation again
    ///
    /// Only provider and storage failures are transient. Cancellation,
    /// validation and dimension errors would fail identically on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::Storage { .. })
    }

    /// Whether this error, or the failure it wraps, is a cancellation
    pub fn is_aborted(&self) -> bool {
        match self {
            Self::Aborted => true,
            Self::RetriesExhausted { source, .. } => source.is_aborted(),
            _ => false,
        }
    }

    /// The underlying failure with any retry wrapping removed
    pub fn root(&self) -> &Error {
        match self {
            Self::RetriesExhausted { source, .. } => source.root(),
            other => other,
        }
    }
}
