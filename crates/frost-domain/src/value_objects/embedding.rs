//! Semantic Embedding Value Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Stored Document Embedding
///
/// One embedding exists per document. Writing a second embedding for the
/// same `document_id` replaces the vector of the first rather than adding a
/// row, so `id` stays stable across re-indexing.
///
/// ## Business Rules
///
/// - `document_id` is unique across the store
/// - `vector.len()` equals the provider's fixed dimensionality
///
/// ## Example
///
/// ```rust
/// use chrono::Utc;
/// use frost_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     id: "emb-1".to_string(),
///     document_id: "doc-1".to_string(),
///     vector: vec![0.1, 0.2, 0.3],
///     created_at: Utc::now(),
/// };
/// assert_eq!(embedding.dimensions(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Embedding {
    /// Store-assigned identifier
    pub id: String,
    /// Identifier of the owning document
    pub document_id: String,
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// When the current vector was written
    pub created_at: DateTime<Utc>,
}

impl Embedding {
    /// Length of the stored vector
    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}
