mod common;

use common::{Note, NoteBuilder};
use crudkit_model::{Record, RecordBuilder};
use crudkit_service::{MemoryStore, RecordStore};
use crudkit_types::RecordId;
use futures::StreamExt;
use pretty_assertions::assert_eq;

fn note(name: &str) -> Note {
    NoteBuilder::default().name(name).guid(RecordId::new()).build()
}

#[tokio::test]
async fn save_assigns_sequential_internal_ids() {
    let store = MemoryStore::new();
    let a = store.save(note("a")).await.unwrap();
    let b = store.save(note("b")).await.unwrap();
    assert_eq!(a.id, Some(1));
    assert_eq!(b.id, Some(2));
}

#[tokio::test]
async fn save_preserves_existing_internal_id() {
    let store = MemoryStore::new();
    let saved = store.save(note("a")).await.unwrap();
    let resaved = store.save(saved.clone()).await.unwrap();
    assert_eq!(resaved.id, saved.id);
}

#[tokio::test]
async fn save_upserts_by_guid() {
    let store = MemoryStore::new();
    let saved = store.save(note("before")).await.unwrap();

    let renamed = saved.to_builder().name("after").build();
    store.save(renamed).await.unwrap();

    assert_eq!(store.len().await, 1);
    let found = store.find_by_guid(saved.guid).await.unwrap().unwrap();
    assert_eq!(found.name, "after");
}

#[tokio::test]
async fn find_by_guid_missing_returns_none() {
    let store: MemoryStore<Note> = MemoryStore::new();
    let found = store.find_by_guid(RecordId::new()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn find_all_preserves_insertion_order() {
    let store = MemoryStore::new();
    for name in ["a", "b", "c"] {
        store.save(note(name)).await.unwrap();
    }
    let names: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .map(|item| item.unwrap().name)
        .collect()
        .await;
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn find_all_snapshot_ignores_later_writes() {
    let store = MemoryStore::new();
    store.save(note("a")).await.unwrap();

    let stream = store.find_all().await.unwrap();
    store.save(note("b")).await.unwrap();

    let seen: Vec<_> = stream.collect().await;
    assert_eq!(seen.len(), 1);
}

#[tokio::test]
async fn remove_takes_record_out() {
    let store = MemoryStore::new();
    let saved = store.save(note("a")).await.unwrap();

    let removed = store.remove(saved.guid).await.unwrap();
    assert_eq!(removed.guid, saved.guid);
    assert!(store.is_empty().await);
    assert!(store.remove(saved.guid).await.is_none());
}
