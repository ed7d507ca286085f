//! In-memory record store.
//!
//! Backs the service's test suites and lightweight deployments. Records are
//! kept in insertion order; internal numeric identity is assigned from a
//! per-store sequence on first save.

use crate::store::{RecordStore, RecordStream, StoreResult};
use async_trait::async_trait;
use crudkit_model::{Record, RecordBuilder};
use crudkit_types::RecordId;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;

/// A [`RecordStore`] holding everything in process memory.
pub struct MemoryStore<R> {
    inner: RwLock<MemoryInner<R>>,
}

struct MemoryInner<R> {
    records: Vec<R>,
    next_id: i64,
}

impl<R: Record> MemoryStore<R> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Removes the record with the given guid, returning it if present.
    /// Not part of the [`RecordStore`] contract; deletion reaches the
    /// store through the service's caller-supplied side effect.
    pub async fn remove(&self, guid: RecordId) -> Option<R> {
        let mut inner = self.inner.write().await;
        let pos = inner.records.iter().position(|r| r.guid() == guid)?;
        Some(inner.records.remove(pos))
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// True if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn find_by_guid(&self, guid: RecordId) -> StoreResult<Option<R>> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.guid() == guid).cloned())
    }

    async fn find_all(&self) -> StoreResult<RecordStream<R>> {
        // Snapshot at call time: each traversal is independent and never
        // observes writes made after the stream was obtained.
        let snapshot: Vec<R> = self.inner.read().await.records.clone();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn save(&self, record: R) -> StoreResult<R> {
        let mut inner = self.inner.write().await;
        let record = if record.id().is_none() {
            let id = inner.next_id;
            inner.next_id += 1;
            record.to_builder().id(Some(id)).build()
        } else {
            record
        };
        match inner.records.iter().position(|r| r.guid() == record.guid()) {
            Some(pos) => inner.records[pos] = record.clone(),
            None => inner.records.push(record.clone()),
        }
        Ok(record)
    }
}
