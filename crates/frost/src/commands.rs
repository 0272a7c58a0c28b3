//! Operations behind the `frost` subcommands
//!
//! Kept out of `main.rs` so they can be exercised against an in-memory
//! [`AppContext`].

use frost_application::{SemanticSearchInput, semantic_search};
use frost_domain::error::{Error, Result};
use frost_domain::value_objects::{Document, Embedding, SimilarityResult};
use frost_domain::CancellationToken;
use frost_infrastructure::{AppConfig, AppContext};
use serde::Serialize;
use tracing::info;

/// One search hit as printed by `frost search`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Matching document id
    pub document_id: String,
    /// Matching document title
    pub title: String,
    /// Cosine similarity to the query
    pub similarity: f64,
}

impl From<SimilarityResult> for SearchHit {
    fn from(result: SimilarityResult) -> Self {
        Self {
            document_id: result.document.id,
            title: result.document.title,
            similarity: result.similarity,
        }
    }
}

/// Run a query, filling in the configured default limit
pub async fn search(
    context: &AppContext,
    mut input: SemanticSearchInput,
    cancel: &CancellationToken,
) -> Result<Vec<SearchHit>> {
    let search_config = &context.config().search;
    if input.limit.is_none() {
        input.limit = u32::try_from(search_config.default_limit).ok();
    }
    if input.effective_limit() > search_config.max_limit {
        return Err(Error::validation(format!(
            "limit must be at most {}",
            search_config.max_limit
        )));
    }

    let service = context.search_service();
    let results = semantic_search(service.as_ref(), &input, cancel).await?;
    Ok(results.into_iter().map(SearchHit::from).collect())
}

/// Store a document and (re)generate its embedding
///
/// Both writes are upserts, so indexing the same id again replaces the
/// content and the vector in place.
pub async fn index_document(
    context: &AppContext,
    document: Document,
    cancel: &CancellationToken,
) -> Result<Embedding> {
    if document.id.trim().is_empty() {
        return Err(Error::validation("document id is required"));
    }

    context
        .executor()
        .execute(cancel, |store| {
            let document = document.clone();
            async move { store.upsert_document(document).await }
        })
        .await?;

    let embedding = context
        .search_service()
        .store_document_embedding(&document.id, &document.content, cancel)
        .await?;

    info!(
        document_id = %document.id,
        embedding_id = %embedding.id,
        dimensions = embedding.dimensions(),
        "Indexed document"
    );
    Ok(embedding)
}

/// Create the PostgreSQL schema
pub async fn init_schema(context: &AppContext) -> Result<()> {
    context.ensure_schema().await?;
    info!("Database schema ready");
    Ok(())
}

/// Effective configuration as TOML with secrets masked
pub fn render_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&config.redacted())
        .map_err(|e| Error::configuration_with_source(format!("Failed to render config: {e}"), e))
}
