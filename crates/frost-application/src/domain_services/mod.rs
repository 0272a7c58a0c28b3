//! Domain services
//!
//! Pure computations shared by the use cases.

/// Cosine similarity and ranking
pub mod similarity;

pub use similarity::{Ranked, cosine_similarity, rank, rank_by};
