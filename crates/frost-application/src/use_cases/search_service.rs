//! Search Service Use Case
//!
//! Composes embedding generation, the retrying executor and the ranker into
//! the two operations the API layer needs: querying and storing embeddings.

use async_trait::async_trait;
use frost_domain::constants::{SEARCH_DEFAULT_CANDIDATE_POOL, SEARCH_MAX_LIMIT, SEARCH_MIN_LIMIT};
use frost_domain::error::{Error, Result};
use frost_domain::ports::SharedEmbeddingProvider;
use frost_domain::value_objects::{Embedding, SimilarityResult};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::domain_services::similarity::rank_by;
use crate::executor::RetryingExecutor;
use crate::ports::services::SearchServiceInterface;
use crate::use_cases::EmbeddingGenerator;

/// Search facade over stored document embeddings
///
/// A query fetches `max(limit, candidate_pool)` stored embeddings, ranks all
/// of them and keeps the best `limit`. Store row order is arbitrary, so a
/// pool larger than `limit` is what makes the top-k meaningful once the
/// store holds more rows than the pool; raising it trades query cost for
/// recall.
#[derive(Clone)]
pub struct SearchService {
    generator: EmbeddingGenerator,
    executor: RetryingExecutor,
    candidate_pool: usize,
}

impl SearchService {
    /// Create a search service with the default candidate pool
    pub fn new(provider: SharedEmbeddingProvider, executor: RetryingExecutor) -> Self {
        Self {
            generator: EmbeddingGenerator::new(provider),
            executor,
            candidate_pool: SEARCH_DEFAULT_CANDIDATE_POOL,
        }
    }

    /// Set how many stored embeddings are ranked per query
    #[must_use]
    pub fn with_candidate_pool(mut self, candidate_pool: usize) -> Self {
        self.candidate_pool = candidate_pool.max(1);
        self
    }

    /// Number of stored embeddings ranked per query
    pub fn candidate_pool(&self) -> usize {
        self.candidate_pool
    }

    /// The executor guarding store access
    pub fn executor(&self) -> &RetryingExecutor {
        &self.executor
    }

    fn validate_limit(limit: usize) -> Result<()> {
        if (SEARCH_MIN_LIMIT..=SEARCH_MAX_LIMIT).contains(&limit) {
            Ok(())
        } else {
            Err(Error::validation(format!(
                "limit must be between {SEARCH_MIN_LIMIT} and {SEARCH_MAX_LIMIT}, got {limit}"
            )))
        }
    }
}

#[async_trait]
impl SearchServiceInterface for SearchService {
    #[instrument(skip(self, query, cancel), fields(query_len = query.len()))]
    async fn search(
        &self,
        query: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<SimilarityResult>> {
        Self::validate_limit(limit)?;

        let query_vector = self.generator.generate(query, cancel).await?;

        let pool = limit.max(self.candidate_pool);
        let candidates = self
            .executor
            .execute(cancel, move |store| async move {
                store.list_embeddings_with_document(pool).await
            })
            .await?;
        let candidate_count = candidates.len();

        let mut ranked = rank_by(&query_vector, candidates, |(embedding, _)| {
            embedding.vector.as_slice()
        });
        ranked.truncate(limit);

        info!(
            candidates = candidate_count,
            returned = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            "Semantic search completed"
        );

        Ok(ranked
            .into_iter()
            .map(|ranked| {
                let (embedding, document) = ranked.payload;
                SimilarityResult {
                    embedding,
                    document,
                    similarity: ranked.score,
                }
            })
            .collect())
    }

    #[instrument(skip(self, text, cancel), fields(text_len = text.len()))]
    async fn store_document_embedding(
        &self,
        document_id: &str,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<Embedding> {
        let vector = self.generator.generate(text, cancel).await?;

        let expected = self.generator.dimensions();
        if vector.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }

        let embedding = self
            .executor
            .execute(cancel, |store| {
                let document_id = document_id.to_string();
                let vector = vector.clone();
                async move { store.upsert_embedding(&document_id, vector).await }
            })
            .await?;

        debug!(embedding_id = %embedding.id, "Stored document embedding");
        Ok(embedding)
    }

    fn embedding_dimensions(&self) -> usize {
        self.generator.dimensions()
    }
}
