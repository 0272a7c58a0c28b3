//! Unit tests for domain error types

use frost_domain::Error;

#[test]
fn test_validation_error() {
    let error = Error::validation("query is required");
    match error {
        Error::Validation { message } => assert_eq!(message, "query is required"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_provider_error_display() {
    let error = Error::provider("openai rate limit exceeded");
    assert_eq!(
        error.to_string(),
        "Embedding provider error: openai rate limit exceeded"
    );
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
    let error = Error::storage_with_source("upsert failed", io);
    match &error {
        Error::Storage { message, source } => {
            assert_eq!(message, "upsert failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Storage error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_retryable_kinds() {
    assert!(Error::provider("timeout").is_retryable());
    assert!(Error::storage("connection refused").is_retryable());

    assert!(!Error::Aborted.is_retryable());
    assert!(!Error::validation("bad").is_retryable());
    assert!(!Error::configuration("missing key").is_retryable());
    assert!(
        !Error::DimensionMismatch {
            expected: 1536,
            actual: 3
        }
        .is_retryable()
    );
}

#[test]
fn test_retries_exhausted_is_not_retryable_again() {
    let error = Error::RetriesExhausted {
        attempts: 3,
        source: Box::new(Error::storage("down")),
    };
    assert!(!error.is_retryable());
    assert!(error.to_string().contains("3 attempts"));
    assert!(matches!(error.root(), Error::Storage { .. }));
}

#[test]
fn test_is_aborted_looks_through_retry_wrapper() {
    assert!(Error::Aborted.is_aborted());
    let wrapped = Error::RetriesExhausted {
        attempts: 2,
        source: Box::new(Error::Aborted),
    };
    assert!(wrapped.is_aborted());
    assert!(!Error::storage("down").is_aborted());
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: Error = parse.unwrap_err().into();
    assert!(matches!(error, Error::Json { .. }));
}
