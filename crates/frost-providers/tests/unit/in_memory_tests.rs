//! Tests for the in-memory document store

use std::sync::Arc;

use frost_domain::value_objects::Document;
use frost_providers::document_store::InMemoryDocumentStore;
use frost_providers::{DocumentStore, Error};

async fn store_with_documents(ids: &[&str]) -> InMemoryDocumentStore {
    let store = InMemoryDocumentStore::new();
    for id in ids {
        store
            .upsert_document(Document::new(*id, format!("Title {id}"), format!("Content {id}")))
            .await
            .unwrap();
    }
    store
}

#[tokio::test]
async fn test_upsert_twice_keeps_one_embedding() {
    let store = store_with_documents(&["doc-1"]).await;

    let first = store.upsert_embedding("doc-1", vec![1.0, 0.0]).await.unwrap();
    let second = store.upsert_embedding("doc-1", vec![0.0, 1.0]).await.unwrap();

    assert_eq!(store.embedding_count(), 1);
    assert_eq!(first.id, second.id);
    assert_eq!(second.vector, vec![0.0, 1.0]);

    let stored = store.find_embedding_by_document("doc-1").await.unwrap().unwrap();
    assert_eq!(stored.vector, vec![0.0, 1.0]);
    assert_eq!(stored.id, first.id);
}

#[tokio::test]
async fn test_upsert_for_unknown_document_fails() {
    let store = InMemoryDocumentStore::new();

    let error = store
        .upsert_embedding("missing", vec![1.0])
        .await
        .expect_err("unknown document must be rejected");

    assert!(matches!(error, Error::Storage { .. }));
    assert!(error.to_string().contains("missing"));
    assert_eq!(store.embedding_count(), 0);
}

#[tokio::test]
async fn test_list_joins_documents_and_respects_limit() {
    let store = store_with_documents(&["a", "b", "c"]).await;
    for id in ["a", "b", "c"] {
        store.upsert_embedding(id, vec![1.0, 2.0]).await.unwrap();
    }

    let all = store.list_embeddings_with_document(10).await.unwrap();
    assert_eq!(all.len(), 3);
    for (embedding, document) in &all {
        assert_eq!(embedding.document_id, document.id);
    }

    let limited = store.list_embeddings_with_document(2).await.unwrap();
    assert_eq!(limited.len(), 2);

    let none = store.list_embeddings_with_document(0).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_documents_without_embeddings_are_not_listed() {
    let store = store_with_documents(&["indexed", "pending"]).await;
    store.upsert_embedding("indexed", vec![1.0]).await.unwrap();

    let listed = store.list_embeddings_with_document(10).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].1.id, "indexed");
}

#[tokio::test]
async fn test_document_upsert_replaces_content() {
    let store = store_with_documents(&["doc"]).await;
    store
        .upsert_document(Document::new("doc", "New title", "New content"))
        .await
        .unwrap();

    let document = store.find_document("doc").await.unwrap().unwrap();
    assert_eq!(document.title, "New title");
    assert_eq!(store.document_count(), 1);
    assert!(store.find_document("other").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_upserts_leave_single_embedding() {
    let store = Arc::new(store_with_documents(&["shared"]).await);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.upsert_embedding("shared", vec![i as f32]).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }

    assert_eq!(store.embedding_count(), 1);
    ids.dedup();
    assert_eq!(ids.len(), 1, "every writer must see the same embedding id");
}
