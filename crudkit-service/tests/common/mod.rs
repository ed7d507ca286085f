//! Shared test fixtures: a sample record type and instrumented stores.

#![allow(dead_code)]

use async_trait::async_trait;
use crudkit_model::{Record, RecordBuilder};
use crudkit_service::{MemoryStore, RecordStore, RecordStream, StoreError, StoreResult};
use crudkit_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// The nil guid used as the builder's "unset" marker.
pub fn nil_guid() -> RecordId {
    RecordId::from_uuid(uuid::Uuid::nil())
}

/// A minimal domain record for exercising the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<i64>,
    pub guid: RecordId,
    pub name: String,
    pub created_by: String,
    pub created_on: Timestamp,
    pub modified_by: String,
    pub modified_on: Timestamp,
}

#[derive(Debug, Default)]
pub struct NoteBuilder {
    id: Option<i64>,
    guid: Option<RecordId>,
    name: String,
    created_by: Option<String>,
    created_on: Option<Timestamp>,
    modified_by: Option<String>,
    modified_on: Option<Timestamp>,
}

impl NoteBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Record for Note {
    type Builder = NoteBuilder;

    fn type_name() -> &'static str {
        "Note"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn guid(&self) -> RecordId {
        self.guid
    }

    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn created_on(&self) -> Timestamp {
        self.created_on
    }

    fn modified_by(&self) -> &str {
        &self.modified_by
    }

    fn modified_on(&self) -> Timestamp {
        self.modified_on
    }

    fn to_builder(&self) -> NoteBuilder {
        NoteBuilder {
            id: self.id,
            guid: Some(self.guid),
            name: self.name.clone(),
            created_by: Some(self.created_by.clone()),
            created_on: Some(self.created_on),
            modified_by: Some(self.modified_by.clone()),
            modified_on: Some(self.modified_on),
        }
    }
}

impl RecordBuilder for NoteBuilder {
    type Record = Note;

    fn id(mut self, id: Option<i64>) -> Self {
        self.id = id;
        self
    }

    fn guid(mut self, guid: RecordId) -> Self {
        self.guid = Some(guid);
        self
    }

    fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    fn created_on(mut self, created_on: Timestamp) -> Self {
        self.created_on = Some(created_on);
        self
    }

    fn modified_by(mut self, modified_by: impl Into<String>) -> Self {
        self.modified_by = Some(modified_by.into());
        self
    }

    fn modified_on(mut self, modified_on: Timestamp) -> Self {
        self.modified_on = Some(modified_on);
        self
    }

    fn build(self) -> Note {
        Note {
            id: self.id,
            guid: self.guid.unwrap_or_else(nil_guid),
            name: self.name,
            created_by: self.created_by.unwrap_or_else(|| "system".into()),
            created_on: self.created_on.unwrap_or_else(Timestamp::now),
            modified_by: self.modified_by.unwrap_or_else(|| "system".into()),
            modified_on: self.modified_on.unwrap_or_else(Timestamp::now),
        }
    }
}

/// Wraps a memory store and counts `save` calls, for asserting that guarded
/// operations never write when the record is missing.
pub struct CountingStore<R> {
    pub inner: MemoryStore<R>,
    saves: AtomicUsize,
}

impl<R: Record> CountingStore<R> {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for CountingStore<R> {
    async fn find_by_guid(&self, guid: RecordId) -> StoreResult<Option<R>> {
        self.inner.find_by_guid(guid).await
    }

    async fn find_all(&self) -> StoreResult<RecordStream<R>> {
        self.inner.find_all().await
    }

    async fn save(&self, record: R) -> StoreResult<R> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(record).await
    }
}

/// A store whose every call fails with a backend error.
pub struct FailingStore;

fn injected() -> StoreError {
    StoreError::Backend("injected failure".into())
}

#[async_trait]
impl RecordStore<Note> for FailingStore {
    async fn find_by_guid(&self, _guid: RecordId) -> StoreResult<Option<Note>> {
        Err(injected())
    }

    async fn find_all(&self) -> StoreResult<RecordStream<Note>> {
        Err(injected())
    }

    async fn save(&self, _record: Note) -> StoreResult<Note> {
        Err(injected())
    }
}
