//! Use case implementations

mod embedding_generator;
mod search_service;

pub use embedding_generator::EmbeddingGenerator;
pub use search_service::SearchService;
