//! The record store contract consumed by the CRUD service.

use async_trait::async_trait;
use crudkit_model::Record;
use crudkit_types::RecordId;
use futures::stream::BoxStream;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a record store backend.
///
/// Backends reduce their internal failure types to these variants; the
/// service wraps them once more into operation-specific [`crate::CrudError`]
/// kinds, so backend internals never leak to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-specific failure (connection, query, constraint).
    #[error("store backend error: {0}")]
    Backend(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A lazy stream of records produced by a bulk read.
pub type RecordStream<R> = BoxStream<'static, StoreResult<R>>;

/// Abstract asynchronous record store.
///
/// The store owns the system of record; the service only holds transient
/// request-scoped values. `save` has upsert semantics and is the single
/// write path reached through the service; per-record atomicity is the
/// store's responsibility.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Looks up one record by its external identifier.
    async fn find_by_guid(&self, guid: RecordId) -> StoreResult<Option<R>>;

    /// Returns a lazy stream over all records. Each call produces an
    /// independent traversal; the service does not buffer it.
    async fn find_all(&self) -> StoreResult<RecordStream<R>>;

    /// Persists a record, inserting or replacing by external identifier.
    /// Returns the stored representation (with any store-assigned internal
    /// identity filled in).
    async fn save(&self, record: R) -> StoreResult<R>;
}
