//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for semantic search.
//!
//! | Provider | Type | Use |
//! |----------|------|-----|
//! | NullEmbeddingProvider | Local, deterministic | Tests and offline development |
//! | OpenAIEmbeddingProvider | Cloud | Production (`text-embedding-3-small` by default) |

pub mod helpers;
pub mod null;
pub mod openai;

pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
