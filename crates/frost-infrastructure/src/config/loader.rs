//! Configuration loader
//!
//! Sources are merged in this order (later sources override earlier):
//!
//! 1. Default values from `AppConfig::default()`
//! 2. TOML configuration file (explicit path, or the first `frost.toml` found)
//! 3. The unprefixed `OPENAI_API_KEY` and `DATABASE_URL` variables
//! 4. Environment variables with prefix, nested with `__`
//!    (e.g. `FROST_SEARCH__CANDIDATE_POOL=200`)

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use frost_domain::constants::{SEARCH_MAX_LIMIT, SEARCH_MIN_LIMIT};
use frost_domain::error::{Error, Result};
use frost_providers::embedding::OpenAIEmbeddingProvider;

use crate::config::{
    AppConfig, DatabaseConfig, EmbeddingConfig, EmbeddingProviderKind, LoggingConfig,
    ResilienceConfig, SearchConfig, StoreProviderKind,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DATABASE_URL_ENV, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, OPENAI_API_KEY_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Whether `OPENAI_API_KEY` / `DATABASE_URL` are honoured
    well_known_env: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            well_known_env: true,
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore `OPENAI_API_KEY` and `DATABASE_URL`
    #[must_use]
    pub fn without_well_known_env(mut self) -> Self {
        self.well_known_env = false;
        self
    }

    /// Load and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let app_config = self.load_unvalidated()?;
        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Merge all sources without checking required settings
    ///
    /// Used to inspect an incomplete configuration, e.g. one that still
    /// lacks an API key.
    pub fn load_unvalidated(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            // An explicitly requested file must exist
            if !config_path.exists() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(default_path));
        }

        if self.well_known_env {
            figment = Self::merge_well_known_env(figment);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        figment
            .extract()
            .config_context("Failed to extract configuration")
    }

    /// The file `load` reads, if any
    pub fn source_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Save configuration to file as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// `OPENAI_API_KEY` and `DATABASE_URL` as used by existing deployments;
    /// a database URL selects the PostgreSQL store
    fn merge_well_known_env(mut figment: Figment) -> Figment {
        if let Some(api_key) = non_empty_env(OPENAI_API_KEY_ENV) {
            figment = figment.merge(Serialized::default("embedding.api_key", api_key));
        }
        if let Some(url) = non_empty_env(DATABASE_URL_ENV) {
            figment = figment
                .merge(Serialized::default("database.url", url))
                .merge(Serialized::default(
                    "database.provider",
                    StoreProviderKind::Postgres,
                ));
        }
        figment
    }

    /// First existing `frost.toml` among the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_embedding_config(&config.embedding)?;
    validate_database_config(&config.database)?;
    validate_resilience_config(&config.resilience)?;
    validate_search_config(&config.search)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_embedding_config(config: &EmbeddingConfig) -> Result<()> {
    if config.provider == EmbeddingProviderKind::OpenAI {
        let has_key = config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if !has_key {
            return Err(Error::configuration(format!(
                "OpenAI API key is required (set {OPENAI_API_KEY_ENV} or embedding.api_key)"
            )));
        }
    }
    if config.model.trim().is_empty() {
        return Err(Error::configuration("Embedding model cannot be empty"));
    }
    if config.dimensions == Some(0) || config.expected_dimensions == Some(0) {
        return Err(Error::configuration("Embedding dimensions cannot be 0"));
    }
    if config.provider == EmbeddingProviderKind::OpenAI
        && config.dimensions.is_none()
        && config.expected_dimensions.is_none()
        && OpenAIEmbeddingProvider::known_model_dimensions(&config.model).is_none()
    {
        return Err(Error::configuration(format!(
            "Unknown embedding model '{}': set embedding.expected_dimensions",
            config.model
        )));
    }
    if config.timeout_secs == 0 {
        return Err(Error::configuration("Embedding timeout cannot be 0"));
    }
    Ok(())
}

fn validate_database_config(config: &DatabaseConfig) -> Result<()> {
    if config.provider == StoreProviderKind::Postgres {
        let has_url = config
            .url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if !has_url {
            return Err(Error::configuration(format!(
                "Database URL is required for the postgres store (set {DATABASE_URL_ENV} or database.url)"
            )));
        }
    }
    if config.max_connections == 0 {
        return Err(Error::configuration("Database max_connections cannot be 0"));
    }
    Ok(())
}

fn validate_resilience_config(config: &ResilienceConfig) -> Result<()> {
    if config.max_attempts == 0 {
        return Err(Error::configuration("Retry max_attempts must be at least 1"));
    }
    if !config.backoff_factor.is_finite() || config.backoff_factor < 1.0 {
        return Err(Error::configuration(format!(
            "Retry backoff_factor must be a finite number >= 1.0, got {}",
            config.backoff_factor
        )));
    }
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<()> {
    if !(SEARCH_MIN_LIMIT..=SEARCH_MAX_LIMIT).contains(&config.max_limit) {
        return Err(Error::configuration(format!(
            "Search max_limit must be between {SEARCH_MIN_LIMIT} and {SEARCH_MAX_LIMIT}, got {}",
            config.max_limit
        )));
    }
    if !(SEARCH_MIN_LIMIT..=config.max_limit).contains(&config.default_limit) {
        return Err(Error::configuration(format!(
            "Search default_limit must be between {SEARCH_MIN_LIMIT} and max_limit ({}), got {}",
            config.max_limit, config.default_limit
        )));
    }
    if config.candidate_pool == 0 {
        return Err(Error::configuration("Search candidate_pool cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set embedding configuration
    #[must_use]
    pub fn with_embedding(mut self, embedding: EmbeddingConfig) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Set database configuration
    #[must_use]
    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.config.database = database;
        self
    }

    /// Set resilience configuration
    #[must_use]
    pub fn with_resilience(mut self, resilience: ResilienceConfig) -> Self {
        self.config.resilience = resilience;
        self
    }

    /// Set search configuration
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Set logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
