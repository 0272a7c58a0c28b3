//! Tests for the deterministic null embedding provider

use frost_domain::CancellationToken;
use frost_providers::embedding::NullEmbeddingProvider;
use frost_providers::{EmbeddingProvider, Error};

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (na * nb)
}

#[tokio::test]
async fn test_vectors_are_deterministic() {
    let provider = NullEmbeddingProvider::new();
    let cancel = CancellationToken::new();

    let first = provider.embed("Cooling tower maintenance", &cancel).await.unwrap();
    let second = provider.embed("cooling TOWER maintenance!", &cancel).await.unwrap();

    assert_eq!(first.len(), 384);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_custom_dimensions() {
    let provider = NullEmbeddingProvider::with_dimensions(8);
    let vector = provider
        .embed("one two three", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(provider.dimensions(), 8);
    assert_eq!(vector.len(), 8);
    assert!((vector.iter().sum::<f32>() - 3.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_shared_words_score_higher() {
    let provider = NullEmbeddingProvider::new();
    let cancel = CancellationToken::new();

    let query = provider.embed("boiler pressure valve", &cancel).await.unwrap();
    let related = provider.embed("pressure valve replacement", &cancel).await.unwrap();
    let unrelated = provider.embed("quarterly invoice summary", &cancel).await.unwrap();

    assert!(cosine(&query, &related) > cosine(&query, &unrelated));
}

#[tokio::test]
async fn test_empty_text_yields_zero_vector() {
    let provider = NullEmbeddingProvider::with_dimensions(4);
    let vector = provider.embed("", &CancellationToken::new()).await.unwrap();
    assert_eq!(vector, vec![0.0; 4]);
}

#[tokio::test]
async fn test_cancelled_token_aborts() {
    let provider = NullEmbeddingProvider::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = provider.embed("text", &cancel).await;
    assert!(matches!(result, Err(Error::Aborted)));
}
