//! Document Store Implementations
//!
//! | Store | Persistence | Upsert primitive |
//! |-------|-------------|------------------|
//! | InMemoryDocumentStore | None (process lifetime) | `DashMap` entry lock |
//! | PostgresDocumentStore | PostgreSQL | `INSERT ... ON CONFLICT (document_id) DO UPDATE` |

pub mod in_memory;
#[cfg(feature = "store-postgres")]
pub mod postgres;

pub use self::in_memory::InMemoryDocumentStore;
#[cfg(feature = "store-postgres")]
pub use self::postgres::{PostgresDocumentStore, PostgresStoreConfig};
