//! Error extension utilities
//!
//! Context helpers that convert foreign errors into domain errors at the
//! infrastructure boundary.

use std::fmt;

use frost_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```no_run
/// use frost_infrastructure::error_ext::ErrorContext;
///
/// fn read(path: &std::path::Path) -> frost_domain::Result<String> {
///     std::fs::read_to_string(path).config_context(format!("Failed to read {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context, classifying the failure as I/O
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Io {
            source: std::io::Error::other(format!("{context}: {err}")),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
