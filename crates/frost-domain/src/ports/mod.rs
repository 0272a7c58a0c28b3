//! Domain Port Interfaces
//!
//! Contracts that adapters in `frost-providers` implement. High-level code
//! depends on these traits only and receives concrete instances from the
//! composition root.

/// External service provider ports
pub mod providers;

pub use providers::{DocumentStore, EmbeddingProvider, SharedDocumentStore, SharedEmbeddingProvider};
