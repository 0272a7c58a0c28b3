//! Domain layer constants
//!
//! Values that shape the behaviour of the search core. Infrastructure
//! constants (file names, env prefixes) live in `frost_infrastructure`.

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Number of results returned when the caller does not pass a limit
pub const SEARCH_DEFAULT_LIMIT: usize = 5;

/// Smallest accepted result limit
pub const SEARCH_MIN_LIMIT: usize = 1;

/// Largest accepted result limit
pub const SEARCH_MAX_LIMIT: usize = 20;

/// Default number of stored embeddings fetched and ranked per query
pub const SEARCH_DEFAULT_CANDIDATE_POOL: usize = 100;

// ============================================================================
// RETRY CONSTANTS
// ============================================================================

/// Total attempts (first try plus retries) for store operations
pub const RETRY_DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Multiplier applied to the delay after every failed attempt
pub const RETRY_DEFAULT_BACKOFF_FACTOR: f64 = 2.0;

/// Delay before the first retry, in milliseconds
pub const RETRY_DEFAULT_INITIAL_DELAY_MS: u64 = 1000;
