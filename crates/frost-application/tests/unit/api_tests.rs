//! Tests for the caller-facing search API

use std::sync::Arc;
use std::time::Duration;

use frost_application::{RetryingExecutor, SearchService, SemanticSearchInput, semantic_search};
use frost_domain::error::Error;
use frost_domain::value_objects::RetryPolicy;
use frost_domain::CancellationToken;

use crate::support::{ScriptedEmbeddingProvider, seeded_store};

#[test]
fn test_input_deserializes_with_optional_limit() {
    let input: SemanticSearchInput = serde_json::from_str(r#"{"query":"valve"}"#).unwrap();
    assert_eq!(input, SemanticSearchInput::new("valve"));
    assert_eq!(input.effective_limit(), 5);

    let input: SemanticSearchInput =
        serde_json::from_str(r#"{"query":"valve","limit":12}"#).unwrap();
    assert_eq!(input.effective_limit(), 12);
}

#[test]
fn test_input_rejects_unknown_fields() {
    let result = serde_json::from_str::<SemanticSearchInput>(r#"{"query":"q","page":2}"#);
    assert!(result.is_err());
}

#[test]
fn test_input_rejects_non_integer_limit() {
    let result = serde_json::from_str::<SemanticSearchInput>(r#"{"query":"q","limit":2.5}"#);
    assert!(result.is_err());
}

#[test]
fn test_validation_messages() {
    let error = SemanticSearchInput::new("").validate().unwrap_err();
    assert_eq!(error.to_string(), "Validation error: query is required");

    let error = SemanticSearchInput::new("q").with_limit(0).validate().unwrap_err();
    assert_eq!(
        error.to_string(),
        "Validation error: limit must be between 1 and 20"
    );

    assert!(SemanticSearchInput::new("q").with_limit(21).validate().is_err());
    assert!(SemanticSearchInput::new("q").with_limit(1).validate().is_ok());
    assert!(SemanticSearchInput::new("q").with_limit(20).validate().is_ok());
}

#[test]
fn test_serialization_omits_missing_limit() {
    let json = serde_json::to_string(&SemanticSearchInput::new("pump")).unwrap();
    assert_eq!(json, r#"{"query":"pump"}"#);
}

#[tokio::test]
async fn test_semantic_search_validates_before_calling_provider() {
    let provider = Arc::new(ScriptedEmbeddingProvider::new(2));
    let service = SearchService::new(
        provider.clone(),
        RetryingExecutor::new(seeded_store(&[]).await, RetryPolicy::default()),
    );

    let result = semantic_search(
        &service,
        &SemanticSearchInput::new("   "),
        &CancellationToken::new(),
    )
    .await;

    assert!(matches!(result, Err(Error::Validation { .. })));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_semantic_search_returns_ranked_results() {
    let store = seeded_store(&[("near", vec![1.0, 0.1]), ("far", vec![0.0, 1.0])]).await;
    let provider = ScriptedEmbeddingProvider::new(2).with_vector("pump", vec![1.0, 0.0]);
    let service = SearchService::new(
        Arc::new(provider),
        RetryingExecutor::new(
            store,
            RetryPolicy::default().with_initial_delay(Duration::from_millis(1)),
        ),
    );

    let results = semantic_search(
        &service,
        &SemanticSearchInput::new("pump").with_limit(1),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "near");
}
