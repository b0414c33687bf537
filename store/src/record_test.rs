use super::*;
use crate::storage::MemoryStorage;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Note {
    id: String,
    body: String,
}

impl Record for Note {
    const STORAGE_KEY: &'static str = "notes";
    const EXPORT_FILE: &'static str = "notes.json";

    fn id(&self) -> &str {
        &self.id
    }
}

fn note(id: &str, body: &str) -> Note {
    Note {
        id: id.to_owned(),
        body: body.to_owned(),
    }
}

fn store_with(notes: &[Note]) -> RecordStore<Note, MemoryStorage> {
    let mut store = RecordStore::new(MemoryStorage::new());
    store.replace_all(notes.to_vec());
    store
}

// =============================================================
// Snapshot loading
// =============================================================

#[test]
fn load_snapshot_replaces_the_list() {
    let mut store = store_with(&[note("old", "stale")]);
    let count = store
        .load_snapshot(r#"[{"id":"a","body":"one"},{"id":"b","body":"two"}]"#)
        .expect("snapshot should parse");
    assert_eq!(count, 2);
    assert_eq!(store.all(), &[note("a", "one"), note("b", "two")]);
}

#[test]
fn load_snapshot_rejects_malformed_json() {
    let mut store = store_with(&[note("kept", "intact")]);
    let err = store.load_snapshot("not json").expect_err("should fail");
    assert!(matches!(err, StoreError::Snapshot(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn load_snapshot_does_not_persist() {
    let mut store = store_with(&[]);
    store
        .load_snapshot(r#"[{"id":"a","body":"one"}]"#)
        .expect("snapshot should parse");
    assert_eq!(store.storage.get(Note::STORAGE_KEY), None);
}

// =============================================================
// Mutation and persistence
// =============================================================

#[test]
fn insert_front_orders_most_recent_first() {
    let mut store = store_with(&[note("first", "seed")]);
    store.insert_front(note("second", "newer"));
    assert_eq!(store.all()[0].id, "second");
    assert_eq!(store.all()[1].id, "first");
}

#[test]
fn insert_front_writes_the_full_list_to_storage() {
    let mut store = store_with(&[]);
    store.insert_front(note("a", "one"));
    let raw = store
        .storage
        .get(Note::STORAGE_KEY)
        .expect("list should be persisted");
    let persisted: Vec<Note> = serde_json::from_str(&raw).expect("persisted JSON");
    assert_eq!(persisted, vec![note("a", "one")]);
}

#[test]
fn update_with_mutates_and_returns_the_record() {
    let mut store = store_with(&[note("a", "one"), note("b", "two")]);
    let updated = store.update_with("b", |n| n.body = "patched".to_owned());
    assert_eq!(updated, Some(note("b", "patched")));
    assert_eq!(store.get("b").expect("present").body, "patched");
}

#[test]
fn update_with_unknown_id_returns_none_and_changes_nothing() {
    let mut store = store_with(&[note("a", "one")]);
    let updated = store.update_with("missing", |n| n.body = "patched".to_owned());
    assert_eq!(updated, None);
    assert_eq!(store.all(), &[note("a", "one")]);
    assert_eq!(store.storage.get(Note::STORAGE_KEY), None);
}

#[test]
fn delete_removes_exactly_the_first_match() {
    let mut store = store_with(&[note("dup", "first"), note("dup", "second"), note("c", "three")]);
    let removed = store.delete("dup").expect("should remove");
    assert_eq!(removed.body, "first");
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].body, "second");
}

#[test]
fn delete_unknown_id_returns_none() {
    let mut store = store_with(&[note("a", "one")]);
    assert_eq!(store.delete("missing"), None);
    assert_eq!(store.len(), 1);
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_json_round_trips_through_load_snapshot() {
    let mut store = store_with(&[note("a", "one"), note("b", "two")]);
    let exported = store.export_json();

    let mut reloaded = store_with(&[]);
    reloaded
        .load_snapshot(&exported)
        .expect("exported JSON should re-load");
    assert_eq!(reloaded.all(), store.all());
}

#[test]
fn export_data_uri_has_json_media_type_prefix() {
    let store = store_with(&[note("a", "one")]);
    let uri = store.export_data_uri();
    assert!(uri.starts_with("data:application/json;charset=utf-8,"));
    assert!(uri.contains("%22id%22"));
}

#[test]
fn empty_store_reports_empty() {
    let store = store_with(&[]);
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.export_json(), "[]");
}
