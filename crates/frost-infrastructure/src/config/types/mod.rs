//! Configuration types module

pub mod app;
pub mod database;
pub mod embedding;
pub mod logging;
pub mod resilience;
pub mod search;

// Re-export main types
pub use app::AppConfig;
pub use database::{DatabaseConfig, StoreProviderKind};
pub use embedding::{EmbeddingConfig, EmbeddingProviderKind};
pub use logging::LoggingConfig;
pub use resilience::ResilienceConfig;
pub use search::SearchConfig;
