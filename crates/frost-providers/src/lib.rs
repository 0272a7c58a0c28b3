//! # Frost - Provider Implementations
//!
//! Adapters for the ports defined in `frost-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Null |
//! | Document Store | `DocumentStore` | InMemory, Postgres |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! frost-providers = { version = "0.1", default-features = false }
//! ```
//!
//! disables the PostgreSQL store (`store-postgres`) for memory-only builds.

// Re-export frost-domain types commonly used with providers
pub use frost_domain::error::{Error, Result};
pub use frost_domain::ports::{DocumentStore, EmbeddingProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Document store implementations
pub mod document_store;
