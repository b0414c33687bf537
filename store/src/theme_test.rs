use super::*;
use crate::storage::MemoryStorage;

fn storage_with_theme(value: &str) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage.set(THEME_KEY, value);
    storage
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_string_round_trip() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn unknown_persisted_value_is_no_choice() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn flipped_swaps_light_and_dark() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn stored_choice_overrides_system_preference() {
    let manager = ThemeManager::new(storage_with_theme("dark"), Theme::Light);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn absent_choice_falls_back_to_system_preference() {
    let manager = ThemeManager::new(MemoryStorage::new(), Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn unknown_stored_value_falls_back_to_system_preference() {
    let manager = ThemeManager::new(storage_with_theme("sepia"), Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn construction_does_not_persist_the_resolved_theme() {
    let manager = ThemeManager::new(MemoryStorage::new(), Theme::Dark);
    assert_eq!(manager.storage.get(THEME_KEY), None);
}

// =============================================================
// Explicit choice and system tracking
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let mut manager = ThemeManager::new(MemoryStorage::new(), Theme::Light);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(manager.storage.get(THEME_KEY), Some("dark".to_owned()));
}

#[test]
fn system_change_applies_while_no_explicit_choice_exists() {
    let mut manager = ThemeManager::new(MemoryStorage::new(), Theme::Light);
    assert!(manager.system_preference_changed(Theme::Dark));
    assert_eq!(manager.current(), Theme::Dark);
    // Tracking the system is not an explicit choice, so nothing persists.
    assert_eq!(manager.storage.get(THEME_KEY), None);
}

#[test]
fn system_change_is_ignored_after_an_explicit_toggle() {
    let mut manager = ThemeManager::new(MemoryStorage::new(), Theme::Light);
    manager.toggle();
    assert!(!manager.system_preference_changed(Theme::Light));
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn system_change_is_ignored_with_a_persisted_choice() {
    let mut manager = ThemeManager::new(storage_with_theme("light"), Theme::Light);
    assert!(!manager.system_preference_changed(Theme::Dark));
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn set_records_an_explicit_choice() {
    let mut manager = ThemeManager::new(MemoryStorage::new(), Theme::Light);
    manager.set(Theme::Dark);
    assert_eq!(manager.storage.get(THEME_KEY), Some("dark".to_owned()));
    assert!(!manager.system_preference_changed(Theme::Light));
}
