//! Application Layer - Frost semantic search
//!
//! Orchestrates the domain ports into the search core:
//!
//! - [`executor`]: bounded exponential-backoff retry with cooperative cancellation
//!   around every document store call
//! - [`domain_services::similarity`]: cosine similarity and stable ranking
//! - [`use_cases`]: embedding generation and the search facade
//! - [`api`]: the caller-facing `semantic_search` entry point and its input schema
//!
//! ## Dependencies
//!
//! This crate depends only on `frost-domain` and pure async/serialization
//! libraries. Concrete providers are injected by the composition root.

pub mod api;
pub mod domain_services;
pub mod executor;
pub mod ports;
pub mod use_cases;

pub use api::{SemanticSearchInput, semantic_search};
pub use executor::RetryingExecutor;
pub use ports::services::SearchServiceInterface;
pub use use_cases::{EmbeddingGenerator, SearchService};
