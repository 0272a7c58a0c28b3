//! Tests for cosine similarity and ranking

use frost_application::domain_services::similarity::{cosine_similarity, rank, rank_by};

#[test]
fn test_identical_vectors_score_one() {
    let score = cosine_similarity(&[0.3, 0.4, 0.5], &[0.3, 0.4, 0.5]);
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn test_opposite_vectors_score_minus_one() {
    let score = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]);
    assert!((score + 1.0).abs() < 1e-9);
}

#[test]
fn test_orthogonal_vectors_score_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
}

#[test]
fn test_degenerate_inputs_score_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]), 0.0);
}

#[test]
fn test_scores_stay_in_range() {
    let vectors: [&[f32]; 4] = [
        &[1e-20, 3.0, -7.5],
        &[1e20, -1e20, 1.0],
        &[0.1, 0.1, 0.1],
        &[-4.0, 0.0, 2.5],
    ];
    for a in vectors {
        for b in vectors {
            let score = cosine_similarity(a, b);
            assert!((-1.0..=1.0).contains(&score), "{a:?} vs {b:?} = {score}");
        }
    }
}

#[test]
fn test_rank_orders_by_descending_score() {
    let query = [1.0, 0.0, 0.0];
    let candidates = vec![
        (vec![1.0, 0.0, 0.0], "x-axis"),
        (vec![0.0, 1.0, 0.0], "y-axis"),
        (vec![0.5, 0.5, 0.0], "diagonal"),
    ];

    let ranked = rank(&query, candidates);
    let order: Vec<_> = ranked.iter().map(|r| r.payload).collect();

    assert_eq!(order, vec!["x-axis", "diagonal", "y-axis"]);
    assert!((ranked[0].score - 1.0).abs() < 1e-9);
    assert!((ranked[1].score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn test_rank_is_stable_for_ties() {
    let query = [1.0, 0.0];
    let candidates = vec![
        (vec![2.0, 0.0], 1),
        (vec![0.0, 0.0], 2),
        (vec![3.0, 0.0], 3),
        (vec![1.0, 2.0, 3.0], 4),
        (vec![0.5, 0.0], 5),
    ];

    let order: Vec<_> = rank(&query, candidates).into_iter().map(|r| r.payload).collect();

    // equal 1.0 scores keep input order; so do the two 0.0 scores
    assert_eq!(order, vec![1, 3, 5, 2, 4]);
}

#[test]
fn test_rank_by_reads_vector_from_payload() {
    struct Row {
        name: &'static str,
        vector: Vec<f32>,
    }
    let rows = vec![
        Row { name: "far", vector: vec![0.0, 1.0] },
        Row { name: "near", vector: vec![1.0, 0.1] },
    ];

    let ranked = rank_by(&[1.0, 0.0], rows, |row| row.vector.as_slice());
    assert_eq!(ranked[0].payload.name, "near");
    assert_eq!(ranked[1].payload.name, "far");
}

#[test]
fn test_rank_empty_input() {
    let ranked = rank::<Vec<f32>, ()>(&[1.0], Vec::new());
    assert!(ranked.is_empty());
}
