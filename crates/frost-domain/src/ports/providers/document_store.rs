use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Document, Embedding};

/// Shared document store handle
pub type SharedDocumentStore = Arc<dyn DocumentStore>;

/// Document and Embedding Persistence
///
/// Owns the embedding table and reads the externally owned documents.
/// The search core reaches a store only through the retrying executor, so
/// every operation here may run more than once for a single logical call
/// and must be safe to repeat.
///
/// # Atomicity
///
/// [`upsert_embedding`](DocumentStore::upsert_embedding) must be a single
/// conditional write keyed by `document_id` (a native upsert or an entry
/// lock), never a read followed by a separate insert or update.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the embedding stored for a document, if any
    async fn find_embedding_by_document(&self, document_id: &str) -> Result<Option<Embedding>>;

    /// Insert or replace the embedding for a document
    ///
    /// Fails with a storage error when the document does not exist.
    /// Returns the embedding as persisted.
    async fn upsert_embedding(&self, document_id: &str, vector: Vec<f32>) -> Result<Embedding>;

    /// List up to `limit` embeddings together with their documents
    ///
    /// Row order is unspecified; callers rank the result themselves.
    async fn list_embeddings_with_document(
        &self,
        limit: usize,
    ) -> Result<Vec<(Embedding, Document)>>;

    /// Insert or replace a document
    async fn upsert_document(&self, document: Document) -> Result<()>;

    /// Fetch a document by id
    async fn find_document(&self, id: &str) -> Result<Option<Document>>;

    /// Name of this store implementation (e.g. "memory", "postgres")
    fn provider_name(&self) -> &str;
}
