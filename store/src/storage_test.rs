use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("theme"), None);
}

#[test]
fn memory_storage_round_trips_a_value() {
    let mut storage = MemoryStorage::new();
    storage.set("theme", "dark");
    assert_eq!(storage.get("theme"), Some("dark".to_owned()));
}

#[test]
fn memory_storage_overwrites_previous_value() {
    let mut storage = MemoryStorage::new();
    storage.set("theme", "dark");
    storage.set("theme", "light");
    assert_eq!(storage.get("theme"), Some("light".to_owned()));
}

#[test]
fn memory_storage_keys_are_independent() {
    let mut storage = MemoryStorage::new();
    storage.set("blogPosts", "[]");
    assert_eq!(storage.get("contacts"), None);
    assert_eq!(storage.get("blogPosts"), Some("[]".to_owned()));
}
