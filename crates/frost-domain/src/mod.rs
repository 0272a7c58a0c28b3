//! # Frost Domain Layer
//!
//! Core types for the document semantic search subsystem: the error
//! taxonomy, value objects, and the ports that adapters implement.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error kinds with declared retryability |
//! | [`value_objects`] | `Embedding`, `Document`, `SimilarityResult`, `RetryPolicy` |
//! | [`ports`] | `EmbeddingProvider` and `DocumentStore` contracts |
//! | [`constants`] | Search limits and retry defaults |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces implemented by providers
pub mod ports;
/// Domain value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use tokio_util::sync::CancellationToken;
