//! PostgreSQL document store
//!
//! Connection pooling with r2d2. The `postgres` client is blocking, so each
//! operation checks out a connection inside `spawn_blocking`.
//!
//! Embedding upserts are one `INSERT ... ON CONFLICT (document_id) DO UPDATE`
//! statement; the unique constraint on `document_id` serialises concurrent
//! writers for the same document inside the database.

use std::time::Duration;

use async_trait::async_trait;
use frost_domain::error::{Error, Result};
use frost_domain::ports::DocumentStore;
use frost_domain::value_objects::{Document, Embedding};
use postgres::{NoTls, Row};
use r2d2::{Pool, PooledConnection};
use r2d2_postgres::PostgresConnectionManager;
use tracing::debug;
use uuid::Uuid;

use crate::constants::{POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS, POSTGRES_DEFAULT_MAX_CONNECTIONS};

type PgPool = Pool<PostgresConnectionManager<NoTls>>;
type PgConnection = PooledConnection<PostgresConnectionManager<NoTls>>;

/// Table definitions created by [`PostgresDocumentStore::ensure_schema`]
pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS embeddings (
    id TEXT PRIMARY KEY,
    document_id TEXT NOT NULL UNIQUE REFERENCES documents (id) ON DELETE CASCADE,
    vector REAL[] NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const UPSERT_EMBEDDING_SQL: &str = "
INSERT INTO embeddings (id, document_id, vector, created_at)
VALUES ($1, $2, $3, now())
ON CONFLICT (document_id) DO UPDATE
    SET vector = EXCLUDED.vector, created_at = now()
RETURNING id, document_id, vector, created_at";

const FIND_EMBEDDING_SQL: &str =
    "SELECT id, document_id, vector, created_at FROM embeddings WHERE document_id = $1";

const LIST_EMBEDDINGS_SQL: &str = "
SELECT e.id, e.document_id, e.vector, e.created_at, d.id, d.title, d.content
FROM embeddings e
JOIN documents d ON d.id = e.document_id
LIMIT $1";

const UPSERT_DOCUMENT_SQL: &str = "
INSERT INTO documents (id, title, content)
VALUES ($1, $2, $3)
ON CONFLICT (id) DO UPDATE
    SET title = EXCLUDED.title, content = EXCLUDED.content";

const FIND_DOCUMENT_SQL: &str = "SELECT id, title, content FROM documents WHERE id = $1";

/// Connection settings for the PostgreSQL store
#[derive(Debug, Clone)]
pub struct PostgresStoreConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long a checkout may wait for a free connection
    pub connection_timeout: Duration,
}

impl PostgresStoreConfig {
    /// Settings with default pool sizing for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: POSTGRES_DEFAULT_MAX_CONNECTIONS,
            connection_timeout: Duration::from_secs(POSTGRES_DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }
}

/// PostgreSQL-backed document store
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Build the connection pool
    ///
    /// Connections are opened on first use, so an unreachable database
    /// surfaces as a (retryable) storage error on the first operation rather
    /// than at startup.
    pub fn connect(config: &PostgresStoreConfig) -> Result<Self> {
        let pg_config = config.url.parse::<postgres::Config>().map_err(|e| {
            Error::configuration_with_source(format!("Invalid database URL: {e}"), e)
        })?;
        let manager = PostgresConnectionManager::new(pg_config, NoTls);

        let pool = Pool::builder()
            .max_size(config.max_connections.max(1))
            .min_idle(Some(0))
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Ok(Self { pool })
    }

    /// Create the `documents` and `embeddings` tables if missing
    pub async fn ensure_schema(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.batch_execute(SCHEMA_SQL)
                .map_err(|e| Error::storage_with_source(format!("Schema creation failed: {e}"), e))
        })
        .await?;
        debug!("PostgreSQL schema ensured");
        Ok(())
    }

    /// Run blocking work on a pooled connection
    async fn with_connection<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                Error::storage_with_source(format!("Failed to get database connection: {e}"), e)
            })?;
            work(&mut conn)
        })
        .await
        .map_err(|e| Error::storage_with_source(format!("Database task failed: {e}"), e))?
    }
}

fn query_error(operation: &str, e: postgres::Error) -> Error {
    Error::storage_with_source(format!("{operation} failed: {e}"), e)
}

fn embedding_from_row(row: &Row) -> std::result::Result<Embedding, postgres::Error> {
    Ok(Embedding {
        id: row.try_get(0)?,
        document_id: row.try_get(1)?,
        vector: row.try_get(2)?,
        created_at: row.try_get(3)?,
    })
}

fn document_from_row(row: &Row, offset: usize) -> std::result::Result<Document, postgres::Error> {
    Ok(Document {
        id: row.try_get(offset)?,
        title: row.try_get(offset + 1)?,
        content: row.try_get(offset + 2)?,
    })
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn find_embedding_by_document(&self, document_id: &str) -> Result<Option<Embedding>> {
        let document_id = document_id.to_string();
        self.with_connection(move |conn| {
            conn.query_opt(FIND_EMBEDDING_SQL, &[&document_id])
                .and_then(|row| row.as_ref().map(embedding_from_row).transpose())
                .map_err(|e| query_error("Embedding lookup", e))
        })
        .await
    }

    async fn upsert_embedding(&self, document_id: &str, vector: Vec<f32>) -> Result<Embedding> {
        let document_id = document_id.to_string();
        let id = Uuid::new_v4().to_string();
        self.with_connection(move |conn| {
            conn.query_one(UPSERT_EMBEDDING_SQL, &[&id, &document_id, &vector])
                .and_then(|row| embedding_from_row(&row))
                .map_err(|e| query_error("Embedding upsert", e))
        })
        .await
    }

    async fn list_embeddings_with_document(
        &self,
        limit: usize,
    ) -> Result<Vec<(Embedding, Document)>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_connection(move |conn| {
            conn.query(LIST_EMBEDDINGS_SQL, &[&limit])
                .and_then(|rows| {
                    rows.iter()
                        .map(|row| -> std::result::Result<_, postgres::Error> {
                            Ok((embedding_from_row(row)?, document_from_row(row, 4)?))
                        })
                        .collect()
                })
                .map_err(|e| query_error("Embedding listing", e))
        })
        .await
    }

    async fn upsert_document(&self, document: Document) -> Result<()> {
        self.with_connection(move |conn| {
            conn.execute(
                UPSERT_DOCUMENT_SQL,
                &[&document.id, &document.title, &document.content],
            )
            .map(|_| ())
            .map_err(|e| query_error("Document upsert", e))
        })
        .await
    }

    async fn find_document(&self, id: &str) -> Result<Option<Document>> {
        let id = id.to_string();
        self.with_connection(move |conn| {
            conn.query_opt(FIND_DOCUMENT_SQL, &[&id])
                .and_then(|row| row.as_ref().map(|row| document_from_row(row, 0)).transpose())
                .map_err(|e| query_error("Document lookup", e))
        })
        .await
    }

    fn provider_name(&self) -> &str {
        "postgres"
    }
}
