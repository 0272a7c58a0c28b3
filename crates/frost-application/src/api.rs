//! Caller-facing search API
//!
//! The request-routing layer deserializes a [`SemanticSearchInput`] from the
//! request body and hands it to [`semantic_search`]. Input is validated here,
//! before any provider or store call is made.

use frost_domain::constants::{SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT, SEARCH_MIN_LIMIT};
use frost_domain::error::{Error, Result};
use frost_domain::value_objects::SimilarityResult;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::ports::services::SearchServiceInterface;

/// Input schema of the semantic search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemanticSearchInput {
    /// Free text query
    pub query: String,
    /// Maximum number of results, `1..=20`; defaults to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SemanticSearchInput {
    /// Create an input with the default limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Set the result limit
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Reject empty queries and out-of-range limits
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(Error::validation("query is required"));
        }
        if let Some(limit) = self.limit {
            let in_range = usize::try_from(limit)
                .is_ok_and(|limit| (SEARCH_MIN_LIMIT..=SEARCH_MAX_LIMIT).contains(&limit));
            if !in_range {
                return Err(Error::validation(format!(
                    "limit must be between {SEARCH_MIN_LIMIT} and {SEARCH_MAX_LIMIT}"
                )));
            }
        }
        Ok(())
    }

    /// The limit to search with
    pub fn effective_limit(&self) -> usize {
        self.limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(SEARCH_DEFAULT_LIMIT)
    }
}

/// Validate `input` and run the search
pub async fn semantic_search(
    service: &dyn SearchServiceInterface,
    input: &SemanticSearchInput,
    cancel: &CancellationToken,
) -> Result<Vec<SimilarityResult>> {
    input.validate()?;
    service
        .search(&input.query, input.effective_limit(), cancel)
        .await
}
