//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Turns text into a fixed-length vector |
//! | DocumentStore | Persists one embedding per document and lists candidates |

/// Document and embedding store port
pub mod document_store;
/// Embedding provider port
pub mod embedding;

pub use document_store::{DocumentStore, SharedDocumentStore};
pub use embedding::{EmbeddingProvider, SharedEmbeddingProvider};
