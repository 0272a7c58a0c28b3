//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `frost_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "frost.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "frost";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FROST";

/// Separator between nested keys in prefixed environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Unprefixed variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Unprefixed variable holding the PostgreSQL connection URL
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "FROST_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "frost";
