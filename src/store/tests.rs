use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::tempdir;

use crate::catalog::Track;

use super::*;

/// In-memory backend so list semantics can be tested without the filesystem.
#[derive(Default)]
struct MemBackend {
    record: Rc<RefCell<Option<StoredLists>>>,
}

impl StoreBackend for MemBackend {
    fn load(&self) -> Result<Option<StoredLists>, StoreError> {
        Ok(self.record.borrow().clone())
    }

    fn save(&self, lists: &StoredLists) -> Result<(), StoreError> {
        *self.record.borrow_mut() = Some(lists.clone());
        Ok(())
    }
}

fn t(id: &str) -> Track {
    Track {
        id: id.into(),
        title: format!("Track {id}"),
        description: None,
        mood: "chill".into(),
        genre: "any".into(),
        audio_path: PathBuf::from("assets/chill/1.mp3"),
        duration: None,
    }
}

fn mem_store() -> (TrackStore, Rc<RefCell<Option<StoredLists>>>) {
    let record = Rc::new(RefCell::new(None));
    let backend = MemBackend {
        record: record.clone(),
    };
    (TrackStore::open(Box::new(backend)), record)
}

#[test]
fn recent_never_exceeds_cap_and_evicts_the_oldest() {
    let (mut store, _) = mem_store();

    for i in 0..11 {
        store.add_recent(t(&format!("id{i}")));
    }

    assert_eq!(store.recent().len(), RECENT_CAP);
    assert_eq!(store.recent()[0].id, "id10");
    // id0 was the oldest untouched entry and is gone.
    assert!(!store.recent().iter().any(|tr| tr.id == "id0"));
    assert!(store.recent().iter().any(|tr| tr.id == "id1"));
}

#[test]
fn readding_a_recent_id_moves_it_to_the_head_without_duplication() {
    let (mut store, _) = mem_store();

    store.add_recent(t("a"));
    store.add_recent(t("b"));
    store.add_recent(t("c"));
    store.add_recent(t("a"));

    let ids: Vec<_> = store.recent().iter().map(|tr| tr.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "b"]);
}

#[test]
fn liked_add_is_idempotent_by_id() {
    let (mut store, _) = mem_store();

    store.add_liked(t("x"));
    let mut replacement = t("x");
    replacement.title = "Renamed".into();
    store.add_liked(replacement);

    assert_eq!(store.liked().len(), 1);
    assert_eq!(store.liked()[0].title, "Renamed");
    assert!(store.is_liked("x"));
}

#[test]
fn liked_add_then_remove_round_trips() {
    let (mut store, _) = mem_store();

    store.add_liked(t("x"));
    assert!(store.is_liked("x"));

    store.remove_liked("x");
    assert!(!store.is_liked("x"));
    assert!(store.liked().is_empty());

    // Removing a non-member is safe.
    store.remove_liked("x");
    assert!(store.liked().is_empty());
}

#[test]
fn clearing_liked_leaves_recent_untouched() {
    let (mut store, _) = mem_store();

    store.add_recent(t("r1"));
    store.add_liked(t("r1"));
    store.clear_liked();

    assert!(store.liked().is_empty());
    assert_eq!(store.recent().len(), 1);

    store.clear_recent();
    assert!(store.recent().is_empty());
}

#[test]
fn every_mutation_persists_through_the_backend() {
    let (mut store, record) = mem_store();

    store.add_liked(t("x"));
    assert_eq!(
        record.borrow().as_ref().unwrap().liked_tracks[0].id,
        "x"
    );

    store.add_recent(t("y"));
    assert_eq!(
        record.borrow().as_ref().unwrap().recent_tracks[0].id,
        "y"
    );

    store.clear_liked();
    assert!(record.borrow().as_ref().unwrap().liked_tracks.is_empty());
}

#[test]
fn store_reloads_what_the_backend_persisted() {
    let record = Rc::new(RefCell::new(None));

    {
        let backend = MemBackend {
            record: record.clone(),
        };
        let mut store = TrackStore::open(Box::new(backend));
        store.add_liked(t("keep"));
        store.add_recent(t("keep"));
    }

    let backend = MemBackend { record };
    let store = TrackStore::open(Box::new(backend));
    assert!(store.is_liked("keep"));
    assert_eq!(store.recent().len(), 1);
}

#[test]
fn json_backend_round_trips_and_loads_empty_when_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let backend = JsonFileBackend::new(path.clone());
    assert!(backend.load().unwrap().is_none());

    let lists = StoredLists {
        liked_tracks: vec![t("l")],
        recent_tracks: vec![t("r")],
    };
    backend.save(&lists).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // Layout kept from the original record: camelCase list names.
    assert!(raw.contains("likedTracks"));
    assert!(raw.contains("recentTracks"));

    let reloaded = JsonFileBackend::new(path).load().unwrap().unwrap();
    assert_eq!(reloaded, lists);
}

#[test]
fn corrupt_record_opens_as_an_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = TrackStore::open(Box::new(JsonFileBackend::new(path)));
    assert!(store.liked().is_empty());
    assert!(store.recent().is_empty());
}
