//! Embedding generation use case

use frost_domain::error::{Error, Result};
use frost_domain::ports::SharedEmbeddingProvider;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Turns text into a vector through the configured provider
///
/// One call is one provider request. Provider failures surface as
/// [`Error::Provider`] and are not retried here; wrap the call in the
/// retrying executor if that is wanted.
#[derive(Clone)]
pub struct EmbeddingGenerator {
    provider: SharedEmbeddingProvider,
}

impl EmbeddingGenerator {
    /// Create a generator over a provider
    pub fn new(provider: SharedEmbeddingProvider) -> Self {
        Self { provider }
    }

    /// Embed `text`
    ///
    /// An empty vector means the provider returned no embedding data.
    pub async fn generate(&self, text: &str, cancel: &CancellationToken) -> Result<Vec<f32>> {
        if cancel.is_cancelled() {
            return Err(Error::Aborted);
        }

        let vector = self.provider.embed(text, cancel).await?;
        debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model(),
            chars = text.len(),
            dimensions = vector.len(),
            "Generated embedding"
        );
        Ok(vector)
    }

    /// Fixed output dimensionality of the provider
    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}
