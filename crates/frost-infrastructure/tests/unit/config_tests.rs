//! Configuration loader tests

use std::time::Duration;

use frost_domain::Error;
use frost_infrastructure::config::{
    ConfigBuilder, ConfigLoader, EmbeddingConfig, EmbeddingProviderKind, ResilienceConfig,
    StoreProviderKind,
};
use tempfile::TempDir;

/// Loader isolated from the process environment
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new()
        .without_well_known_env()
        .with_env_prefix("FROST_UNIT_TEST_UNUSED")
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("frost.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[embedding]
provider = "null"
dimensions = 64

[resilience]
max_attempts = 5
initial_delay_ms = 250

[search]
candidate_pool = 500
"#,
    );

    let config = isolated_loader().with_config_path(&path).load().unwrap();

    assert_eq!(config.embedding.provider, EmbeddingProviderKind::Null);
    assert_eq!(config.embedding.dimensions, Some(64));
    assert_eq!(config.embedding.model, "text-embedding-3-small");
    assert_eq!(config.database.provider, StoreProviderKind::Memory);
    assert_eq!(config.resilience.max_attempts, 5);
    assert!((config.resilience.backoff_factor - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.search.candidate_pool, 500);
    assert_eq!(config.search.default_limit, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_openai_requires_api_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[embedding]\nprovider = \"openai\"\n");

    let error = isolated_loader().with_config_path(&path).load().unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("API key"));
}

#[test]
fn test_unknown_model_requires_expected_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[embedding]\nmodel = \"nomic-embed-text\"\napi_key = \"sk-local\"\n",
    );

    let error = isolated_loader().with_config_path(&path).load().unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("expected_dimensions"));

    std::fs::write(
        &path,
        "[embedding]\nmodel = \"nomic-embed-text\"\napi_key = \"sk-local\"\nexpected_dimensions = 768\n",
    )
    .unwrap();
    let config = isolated_loader().with_config_path(&path).load().unwrap();
    assert_eq!(config.embedding.expected_dimensions, Some(768));
    assert_eq!(config.embedding.dimensions, None);
}

#[test]
fn test_unvalidated_load_tolerates_missing_api_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[search]\ndefault_limit = 7\n");
    let loader = isolated_loader().with_config_path(&path);

    let config = loader.load_unvalidated().unwrap();
    assert_eq!(config.embedding.api_key, None);
    assert_eq!(config.search.default_limit, 7);
    assert!(loader.load().is_err());
    assert_eq!(loader.source_path(), Some(path));
}

#[test]
fn test_unvalidated_load_still_requires_explicit_file() {
    let dir = TempDir::new().unwrap();
    let loader = isolated_loader().with_config_path(dir.path().join("absent.toml"));

    let error = loader.load_unvalidated().unwrap_err();
    assert!(error.to_string().contains("Configuration file not found"));
}

#[test]
fn test_postgres_requires_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[embedding]\nprovider = \"null\"\n[database]\nprovider = \"postgres\"\n",
    );

    let error = isolated_loader().with_config_path(&path).load().unwrap_err();
    assert!(error.to_string().contains("Database URL"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("[resilience]\nmax_attempts = 0", "max_attempts"),
        ("[resilience]\nbackoff_factor = 0.5", "backoff_factor"),
        ("[search]\nmax_limit = 50", "max_limit"),
        ("[search]\ndefault_limit = 0", "default_limit"),
        ("[search]\nmax_limit = 10\ndefault_limit = 11", "default_limit"),
        ("[search]\ncandidate_pool = 0", "candidate_pool"),
        ("[logging]\nlevel = \"loud\"", "Invalid log level"),
    ];

    for (section, expected) in cases {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, &format!("[embedding]\nprovider = \"null\"\n{section}\n"));

        let error = isolated_loader()
            .with_config_path(&path)
            .load()
            .expect_err(section);
        assert!(
            error.to_string().contains(expected),
            "{section}: {error}"
        );
    }
}

#[test]
fn test_unknown_provider_fails_extraction() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[embedding]\nprovider = \"word2vec\"\n");

    let error = isolated_loader().with_config_path(&path).load().unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = isolated_loader()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap_err();

    assert!(error.to_string().contains("not found"));
}

#[test]
fn test_config_save_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_embedding(EmbeddingConfig {
            provider: EmbeddingProviderKind::Null,
            dimensions: Some(32),
            ..EmbeddingConfig::default()
        })
        .with_resilience(ResilienceConfig {
            max_attempts: 4,
            max_delay_ms: Some(5_000),
            ..ResilienceConfig::default()
        })
        .build();

    let loader = isolated_loader();
    loader.save_to_file(&original, &path).unwrap();
    let loaded = isolated_loader().with_config_path(&path).load().unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), None);
}

#[test]
fn test_retry_policy_from_resilience_config() {
    let config = ResilienceConfig {
        max_attempts: 4,
        backoff_factor: 3.0,
        initial_delay_ms: 100,
        max_delay_ms: Some(500),
    };

    let policy = config.retry_policy();

    assert_eq!(policy.max_attempts(), 4);
    assert_eq!(policy.delay_for_retry(1), Duration::from_millis(100));
    assert_eq!(policy.delay_for_retry(2), Duration::from_millis(300));
    assert_eq!(policy.delay_for_retry(3), Duration::from_millis(500));
}

#[test]
fn test_default_resilience_matches_original_backoff() {
    let policy = ResilienceConfig::default().retry_policy();

    assert_eq!(policy.max_attempts(), 3);
    assert_eq!(policy.delay_for_retry(1), Duration::from_secs(1));
    assert_eq!(policy.delay_for_retry(2), Duration::from_secs(2));
}

#[test]
fn test_redacted_config_hides_secrets() {
    let mut config = ConfigBuilder::new().build();
    config.embedding.api_key = Some("sk-live-123".to_string());
    config.database.url = Some("postgres://frost:hunter2@db/frost".to_string());

    let redacted = config.redacted();

    assert_eq!(redacted.embedding.api_key.as_deref(), Some("***"));
    assert_eq!(
        redacted.database.url.as_deref(),
        Some("postgres://frost:***@db/frost")
    );
    assert_eq!(config.embedding.api_key.as_deref(), Some("sk-live-123"));
}
