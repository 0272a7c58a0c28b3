//! Service interfaces
//!
//! Contracts the request-routing layer (outside this workspace) or the CLI
//! program against. Implementations live in [`crate::use_cases`].

use async_trait::async_trait;
use frost_domain::error::Result;
use frost_domain::value_objects::{Embedding, SimilarityResult};
use tokio_util::sync::CancellationToken;

/// Semantic search over stored document embeddings
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Embed `query`, rank stored embeddings against it and return the best
    /// `limit` matches, most similar first
    ///
    /// `limit` must lie in `1..=20`.
    async fn search(
        &self,
        query: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<SimilarityResult>>;

    /// Embed `text` and persist it as the embedding of `document_id`,
    /// replacing any previous vector for that document
    async fn store_document_embedding(
        &self,
        document_id: &str,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<Embedding>;

    /// Dimensionality of the vectors this service stores and queries with
    fn embedding_dimensions(&self) -> usize;
}
