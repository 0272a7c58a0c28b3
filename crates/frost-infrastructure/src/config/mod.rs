//! Configuration management
//!
//! [`ConfigLoader`] merges defaults, an optional TOML file and environment
//! variables into an [`AppConfig`] and validates the result.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
