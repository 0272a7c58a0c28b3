//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Stored vector for exactly one document |
//! | [`Document`] | Externally owned text the core reads but never mutates |
//! | [`SimilarityResult`] | Ranked hit produced per query, never persisted |
//! | [`RetryPolicy`] | Immutable backoff configuration for the executor |

/// Document value objects
pub mod document;
/// Semantic embedding value objects
pub mod embedding;
/// Retry policy value object
pub mod retry;
/// Search-related value objects
pub mod search;

pub use document::Document;
pub use embedding::Embedding;
pub use retry::RetryPolicy;
pub use search::SimilarityResult;
