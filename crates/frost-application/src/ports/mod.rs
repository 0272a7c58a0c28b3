//! Application ports
//!
//! Service interfaces exposed to the calling API layer.

pub mod services;

pub use services::SearchServiceInterface;
