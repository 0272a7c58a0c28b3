//! Infrastructure Layer - Frost semantic search
//!
//! Cross-cutting technical concerns that sit outside the search core:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`error_ext`]: context helpers that turn foreign errors into domain errors
//! - [`di`]: the composition root wiring providers, store, executor and services

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::AppContext;
pub use error_ext::ErrorContext;
pub use logging::init_logging;
