use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Shared embedding provider handle
pub type SharedEmbeddingProvider = Arc<dyn EmbeddingProvider>;

/// Text Embedding Interface
///
/// Transforms text into a vector of the provider's fixed dimensionality.
/// One call is one request to the provider: implementations do not cache,
/// batch, or retry. Retrying is the caller's decision.
///
/// # Cancellation
///
/// Implementations check `cancel` before issuing the request and abandon
/// the in-flight request when it fires, returning
/// [`Error::Aborted`](crate::error::Error::Aborted).
///
/// # Example
///
/// ```ignore
/// let cancel = CancellationToken::new();
/// let vector = provider.embed("compressor oil change procedure", &cancel).await?;
/// assert_eq!(vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    ///
    /// Returns an empty vector when the provider answers without any
    /// embedding data; that is a degenerate response, not an error.
    async fn embed(&self, text: &str, cancel: &CancellationToken) -> Result<Vec<f32>>;

    /// Dimensionality of every vector this provider produces
    fn dimensions(&self) -> usize;

    /// Model identifier sent to the provider
    fn model(&self) -> &str;

    /// Name of this provider implementation (e.g. "openai", "null")
    fn provider_name(&self) -> &str;
}
