//! Search configuration types

use frost_domain::constants::{
    SEARCH_DEFAULT_CANDIDATE_POOL, SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Query defaults and bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Limit used when a query names none
    pub default_limit: usize,
    /// Largest limit a query may ask for (at most 20)
    pub max_limit: usize,
    /// Stored embeddings ranked per query
    pub candidate_pool: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            max_limit: SEARCH_MAX_LIMIT,
            candidate_pool: SEARCH_DEFAULT_CANDIDATE_POOL,
        }
    }
}
