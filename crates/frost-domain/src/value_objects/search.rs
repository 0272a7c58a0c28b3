//! Search-Related Value Objects

use crate::value_objects::{Document, Embedding};
use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// Produced per query and handed to the caller; never persisted.
///
/// ## Business Rules
///
/// - `similarity` is the cosine similarity in `[-1, 1]` (higher is better)
/// - Mismatched or zero-magnitude vectors score exactly `0.0`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    /// The stored embedding that matched
    pub embedding: Embedding,
    /// The document the embedding belongs to
    pub document: Document,
    /// Cosine similarity between query and stored vector
    pub similarity: f64,
}
