//! In-memory document store implementation
//!
//! Keeps documents and embeddings in concurrent hash maps. Data is lost on
//! restart; meant for development, tests and the null provider setup.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use frost_domain::error::{Error, Result};
use frost_domain::ports::DocumentStore;
use frost_domain::value_objects::{Document, Embedding};
use uuid::Uuid;

/// In-memory document store
///
/// Embeddings are keyed by `document_id`, so the map itself enforces one
/// embedding per document. Upserts go through the map's entry API, which
/// holds the shard lock for the whole insert-or-update.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<String, Document>,
    embeddings: DashMap<String, Embedding>,
}

impl InMemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored embeddings
    pub fn embedding_count(&self) -> usize {
        self.embeddings.len()
    }

    /// Number of stored documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_embedding_by_document(&self, document_id: &str) -> Result<Option<Embedding>> {
        Ok(self
            .embeddings
            .get(document_id)
            .map(|entry| entry.value().clone()))
    }

    async fn upsert_embedding(&self, document_id: &str, vector: Vec<f32>) -> Result<Embedding> {
        if !self.documents.contains_key(document_id) {
            return Err(Error::storage(format!(
                "Document '{document_id}' not found"
            )));
        }

        let embedding = match self.embeddings.entry(document_id.to_string()) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get_mut();
                existing.vector = vector;
                existing.created_at = Utc::now();
                existing.clone()
            }
            Entry::Vacant(vacant) => {
                let embedding = Embedding {
                    id: Uuid::new_v4().to_string(),
                    document_id: document_id.to_string(),
                    vector,
                    created_at: Utc::now(),
                };
                vacant.insert(embedding.clone());
                embedding
            }
        };
        Ok(embedding)
    }

    async fn list_embeddings_with_document(
        &self,
        limit: usize,
    ) -> Result<Vec<(Embedding, Document)>> {
        Ok(self
            .embeddings
            .iter()
            .filter_map(|entry| {
                let embedding = entry.value();
                self.documents
                    .get(&embedding.document_id)
                    .map(|document| (embedding.clone(), document.value().clone()))
            })
            .take(limit)
            .collect())
    }

    async fn upsert_document(&self, document: Document) -> Result<()> {
        self.documents.insert(document.id.clone(), document);
        Ok(())
    }

    async fn find_document(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
