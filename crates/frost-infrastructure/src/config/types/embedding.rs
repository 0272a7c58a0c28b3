//! Embedding provider configuration types

use frost_providers::constants::{EMBEDDING_REQUEST_TIMEOUT_SECS, OPENAI_DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Which embedding provider to construct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// OpenAI or any OpenAI-compatible endpoint
    #[default]
    OpenAI,
    /// Deterministic local vectors, no network
    Null,
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider to use
    pub provider: EmbeddingProviderKind,
    /// Model name sent to the provider
    pub model: String,
    /// Custom API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API key (also read from `OPENAI_API_KEY`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Requested output dimensionality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    /// Vector length the model returns, never sent to the provider
    ///
    /// Required for models outside the OpenAI catalogue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_dimensions: Option<usize>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::default(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            base_url: None,
            api_key: None,
            dimensions: None,
            expected_dimensions: None,
            timeout_secs: EMBEDDING_REQUEST_TIMEOUT_SECS,
        }
    }
}
