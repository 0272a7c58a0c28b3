//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002,
//! and any OpenAI-compatible endpoint through a custom base URL.

use std::time::Duration;

use async_trait::async_trait;
use frost_domain::error::{Error, Result};
use frost_domain::ports::EmbeddingProvider;
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, ERROR_MSG_REQUEST_TIMEOUT, OPENAI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;
use crate::utils::decode_json;

/// Response body of `POST /embeddings`
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// OpenAI embedding provider
///
/// Receives its HTTP client via constructor injection so one connection
/// pool is shared by everything the composition root builds.
///
/// ## Example
///
/// ```rust,no_run
/// use frost_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    dimensions: Option<usize>,
    expected_dimensions: Option<usize>,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            dimensions: None,
            expected_dimensions: None,
            timeout,
            http_client,
        }
    }

    /// Request shortened vectors (text-embedding-3 models only)
    ///
    /// The value is sent as the `dimensions` request field.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Declare the vector length a model returns without sending it
    ///
    /// Needed for models served by compatible endpoints, which are not in
    /// [`Self::known_model_dimensions`] and usually reject the `dimensions`
    /// request field.
    #[must_use]
    pub fn with_expected_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.expected_dimensions = dimensions;
        self
    }

    /// Native vector length of the OpenAI embedding models
    pub fn known_model_dimensions(model: &str) -> Option<usize> {
        match model {
            "text-embedding-3-small" => Some(EMBEDDING_DIMENSION_OPENAI_SMALL),
            "text-embedding-3-large" => Some(EMBEDDING_DIMENSION_OPENAI_LARGE),
            "text-embedding-ada-002" => Some(EMBEDDING_DIMENSION_OPENAI_ADA),
            _ => None,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Send the embedding request and decode the response
    async fn fetch_embedding(&self, text: &str) -> Result<EmbeddingResponse> {
        let mut payload = serde_json::json!({
            "input": text,
            "model": self.model,
            "encoding_format": "float"
        });
        if let Some(dimensions) = self.dimensions {
            payload["dimensions"] = serde_json::json!(dimensions);
        }

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::provider(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::provider_with_source(format!("HTTP request failed: {e}"), e)
                }
            })?;

        decode_json(response, "OpenAI").await
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed(&self, text: &str, cancel: &CancellationToken) -> Result<Vec<f32>> {
        if cancel.is_cancelled() {
            return Err(Error::Aborted);
        }

        // Dropping the request future aborts the HTTP call
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Aborted),
            response = self.fetch_embedding(text) => response?,
        };

        Ok(response
            .data
            .into_iter()
            .next()
            .map(|item| item.embedding)
            .unwrap_or_default())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
            .or(self.expected_dimensions)
            .or_else(|| Self::known_model_dimensions(&self.model))
            .unwrap_or(EMBEDDING_DIMENSION_OPENAI_SMALL)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
