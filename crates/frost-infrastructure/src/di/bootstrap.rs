//! Composition root
//!
//! Builds every long-lived component from an [`AppConfig`] once at process
//! start and hands out shared handles:
//!
//! ```text
//! AppConfig ─┬─> reqwest::Client ─> EmbeddingProvider ──────────────┐
//!            └─> DocumentStore ─> RetryingExecutor ─────────────────┴─> SearchService
//! ```
//!
//! Dropping the context releases the HTTP client and the connection pool.

use std::sync::Arc;
use std::time::Duration;

use frost_application::{RetryingExecutor, SearchService, SearchServiceInterface};
use frost_domain::error::{Error, Result};
use frost_domain::ports::{SharedDocumentStore, SharedEmbeddingProvider};
use frost_providers::document_store::InMemoryDocumentStore;
use frost_providers::embedding::{NullEmbeddingProvider, OpenAIEmbeddingProvider};
#[cfg(feature = "postgres")]
use frost_providers::document_store::{PostgresDocumentStore, PostgresStoreConfig};
use tracing::info;

use crate::config::loader::validate_app_config;
use crate::config::{
    AppConfig, DatabaseConfig, EmbeddingConfig, EmbeddingProviderKind, StoreProviderKind,
};
use crate::error_ext::ErrorContext;

/// Application context owning the wired components
pub struct AppContext {
    config: Arc<AppConfig>,
    embedding: SharedEmbeddingProvider,
    store: SharedDocumentStore,
    #[cfg(feature = "postgres")]
    postgres: Option<Arc<PostgresDocumentStore>>,
    executor: RetryingExecutor,
    search: Arc<SearchService>,
}

impl AppContext {
    /// Validate `config` and construct all components
    ///
    /// No network or database connection is opened here; failures to reach
    /// either surface on first use.
    pub fn build(config: &AppConfig) -> Result<Self> {
        validate_app_config(config)?;

        let embedding = build_embedding_provider(&config.embedding)?;
        let stores = build_document_store(&config.database)?;

        let executor = RetryingExecutor::new(
            Arc::clone(&stores.shared),
            config.resilience.retry_policy(),
        );
        let search = SearchService::new(Arc::clone(&embedding), executor.clone())
            .with_candidate_pool(config.search.candidate_pool);

        info!(
            embedding = embedding.provider_name(),
            model = embedding.model(),
            store = stores.shared.provider_name(),
            max_attempts = config.resilience.max_attempts,
            "Application context initialized"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            embedding,
            store: stores.shared,
            #[cfg(feature = "postgres")]
            postgres: stores.postgres,
            executor,
            search: Arc::new(search),
        })
    }

    /// Effective configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The embedding provider
    pub fn embedding_provider(&self) -> SharedEmbeddingProvider {
        Arc::clone(&self.embedding)
    }

    /// The document store, unguarded by retries
    pub fn document_store(&self) -> SharedDocumentStore {
        Arc::clone(&self.store)
    }

    /// The retrying executor around the document store
    pub fn executor(&self) -> &RetryingExecutor {
        &self.executor
    }

    /// The search facade
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search) as Arc<dyn SearchServiceInterface>
    }

    /// Create the database schema
    ///
    /// Only meaningful for the PostgreSQL store; other stores have no schema.
    pub async fn ensure_schema(&self) -> Result<()> {
        #[cfg(feature = "postgres")]
        {
            if let Some(postgres) = &self.postgres {
                return postgres.ensure_schema().await;
            }
        }
        Err(Error::configuration(format!(
            "The '{}' store has no schema to create",
            self.store.provider_name()
        )))
    }
}

fn build_embedding_provider(config: &EmbeddingConfig) -> Result<SharedEmbeddingProvider> {
    match config.provider {
        EmbeddingProviderKind::OpenAI => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| Error::configuration("OpenAI API key is required"))?;
            let timeout = Duration::from_secs(config.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .config_context("Failed to build HTTP client")?;
            let provider = OpenAIEmbeddingProvider::new(
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                timeout,
                http_client,
            )
            .with_dimensions(config.dimensions)
            .with_expected_dimensions(config.expected_dimensions);
            Ok(Arc::new(provider))
        }
        EmbeddingProviderKind::Null => Ok(Arc::new(match config.dimensions {
            Some(dimensions) => NullEmbeddingProvider::with_dimensions(dimensions),
            None => NullEmbeddingProvider::new(),
        })),
    }
}

struct BuiltStores {
    shared: SharedDocumentStore,
    #[cfg(feature = "postgres")]
    postgres: Option<Arc<PostgresDocumentStore>>,
}

fn build_document_store(config: &DatabaseConfig) -> Result<BuiltStores> {
    match config.provider {
        StoreProviderKind::Memory => Ok(BuiltStores {
            shared: Arc::new(InMemoryDocumentStore::new()),
            #[cfg(feature = "postgres")]
            postgres: None,
        }),
        #[cfg(feature = "postgres")]
        StoreProviderKind::Postgres => {
            let url = config
                .url
                .clone()
                .ok_or_else(|| Error::configuration("Database URL is required"))?;
            let store = Arc::new(PostgresDocumentStore::connect(&PostgresStoreConfig {
                url,
                max_connections: config.max_connections,
                connection_timeout: config.connection_timeout(),
            })?);
            Ok(BuiltStores {
                shared: Arc::clone(&store) as SharedDocumentStore,
                postgres: Some(store),
            })
        }
        #[cfg(not(feature = "postgres"))]
        StoreProviderKind::Postgres => Err(Error::configuration(
            "This build has no PostgreSQL support (enable the `postgres` feature)",
        )),
    }
}
