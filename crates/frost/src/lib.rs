//! # Frost
//!
//! Semantic search over document embeddings. Text is embedded through a
//! pluggable provider (OpenAI by default), stored one vector per document,
//! and queried by cosine similarity. Every store access is retried with
//! exponential backoff and honours cooperative cancellation.
//!
//! ## Example
//!
//! ```no_run
//! use frost::application::{SemanticSearchInput, semantic_search};
//! use frost::infrastructure::{AppContext, ConfigLoader};
//! use frost::CancellationToken;
//!
//! # async fn run() -> frost::Result<()> {
//! let config = ConfigLoader::new().load()?;
//! let context = AppContext::build(&config)?;
//! let service = context.search_service();
//!
//! let input = SemanticSearchInput::new("pump seal leak").with_limit(3);
//! for hit in semantic_search(service.as_ref(), &input, &CancellationToken::new()).await? {
//!     println!("{:.3} {}", hit.similarity, hit.document.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and the error taxonomy
//! - `application` - retrying executor, ranking, search use cases
//! - `infrastructure` - configuration, logging and the composition root
//! - [`commands`] - the operations behind the `frost` binary

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use frost_domain::*;
}

/// Application layer - executor, ranking and search
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use frost_application::*;
}

/// Infrastructure layer - config, logging and composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use frost_infrastructure::*;
}

pub mod commands;

// Re-export commonly used domain types at the crate root
pub use domain::*;
