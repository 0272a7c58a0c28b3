//! Dependency injection
//!
//! Everything is constructed explicitly in [`bootstrap::AppContext::build`];
//! there are no process-wide singletons.

pub mod bootstrap;

pub use bootstrap::AppContext;
