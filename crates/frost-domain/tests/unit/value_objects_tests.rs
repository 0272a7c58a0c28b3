//! Unit tests for domain value objects

use chrono::{TimeZone, Utc};
use frost_domain::value_objects::{Document, Embedding, SimilarityResult};

fn sample_embedding() -> Embedding {
    Embedding {
        id: "emb-1".to_string(),
        document_id: "doc-1".to_string(),
        vector: vec![1.0, 0.0, 0.5],
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_embedding_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(sample_embedding()).unwrap();
    assert_eq!(json["documentId"], "doc-1");
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["vector"].as_array().unwrap().len(), 3);
}

#[test]
fn test_embedding_dimensions() {
    assert_eq!(sample_embedding().dimensions(), 3);
}

#[test]
fn test_document_new() {
    let doc = Document::new("doc-7", "Ammonia chiller manual", "Check suction pressure daily.");
    assert_eq!(doc.id, "doc-7");
    assert_eq!(doc.title, "Ammonia chiller manual");
}

#[test]
fn test_similarity_result_json_shape() {
    let result = SimilarityResult {
        embedding: sample_embedding(),
        document: Document::new("doc-1", "Evaporator defrost", "Hot gas defrost every 6h."),
        similarity: 0.75,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["similarity"], 0.75);
    assert_eq!(json["document"]["title"], "Evaporator defrost");
    assert_eq!(json["embedding"]["documentId"], "doc-1");
}
