//! Cosine similarity ranking
//!
//! Scores stored vectors against a query vector. Nothing here performs I/O
//! or mutates its inputs.

use std::cmp::Ordering;

/// A candidate paired with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<P> {
    /// The caller's candidate payload
    pub payload: P,
    /// Cosine similarity in `[-1, 1]`
    pub score: f64,
}

/// Cosine similarity between two vectors
///
/// Returns `0.0` instead of failing when the lengths differ, when either
/// vector is empty or has zero magnitude, or when the inputs are not finite.
/// Accumulates in `f64` and clamps the result to `[-1, 1]`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    }
}

/// Rank `(vector, payload)` candidates against `query`, best first
///
/// The sort is stable: candidates with equal scores keep their input order.
pub fn rank<V, P>(query: &[f32], candidates: Vec<(V, P)>) -> Vec<Ranked<P>>
where
    V: AsRef<[f32]>,
{
    rank_by(query, candidates, |candidate| candidate.0.as_ref())
        .into_iter()
        .map(|ranked| Ranked {
            payload: ranked.payload.1,
            score: ranked.score,
        })
        .collect()
}

/// Rank arbitrary candidates, reading each one's vector through `vector_of`
///
/// Same ordering guarantees as [`rank`]; lets callers keep the vector inside
/// the payload instead of copying it out.
pub fn rank_by<P, F>(query: &[f32], candidates: Vec<P>, vector_of: F) -> Vec<Ranked<P>>
where
    F: Fn(&P) -> &[f32],
{
    let mut ranked: Vec<Ranked<P>> = candidates
        .into_iter()
        .map(|payload| {
            let score = cosine_similarity(query, vector_of(&payload));
            Ranked { payload, score }
        })
        .collect();

    // `sort_by` is stable; equal scores stay in candidate order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
