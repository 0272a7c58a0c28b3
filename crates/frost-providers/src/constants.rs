//! Provider Constants

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Default OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default timeout for embedding API requests in seconds
pub const EMBEDDING_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// DOCUMENT STORE CONSTANTS
// ============================================================================

/// Default PostgreSQL pool size
pub const POSTGRES_DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default PostgreSQL connection checkout timeout in seconds
pub const POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
