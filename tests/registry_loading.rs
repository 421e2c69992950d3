//! Registry Loading Tests
//!
//! Tests for startup invariants:
//! - A translation that fails to load aborts the whole registry
//! - Discovery maps file names onto translation kinds
//! - Lookups through the registry reach the right translation

use bibleserve::bible::{LoadError, NotFound, Registry, TranslationKind, TranslationSource};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_text(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn sources(entries: &[(&str, TranslationSource)]) -> BTreeMap<String, TranslationSource> {
    entries
        .iter()
        .map(|(id, source)| (id.to_string(), source.clone()))
        .collect()
}

// =============================================================================
// Fail-Fast Tests
// =============================================================================

/// All sources load into one registry.
#[test]
fn test_load_all() {
    let dir = TempDir::new().unwrap();
    let world = write_text(&dir, "world.txt", "0#Ruth#1#1#Now it happened\n");
    let schlachter = write_text(&dir, "schlachter1951.txt", "0#Rut#1#1#Und es geschah\n");

    let registry = Registry::load_all(&sources(&[
        ("world", TranslationSource::new(world)),
        ("schlachter1951", TranslationSource::new(schlachter)),
    ]))
    .unwrap();

    assert_eq!(registry.list_identifiers(), vec!["schlachter1951", "world"]);
    assert_eq!(registry.total_verses(), 2);
    assert_eq!(
        registry.get("schlachter1951").unwrap().kind(),
        TranslationKind::Schlachter1951
    );
}

/// A missing file aborts the load.
#[test]
fn test_missing_file_aborts() {
    let dir = TempDir::new().unwrap();
    let world = write_text(&dir, "world.txt", "0#Ruth#1#1#Now it happened\n");

    let result = Registry::load_all(&sources(&[
        ("world", TranslationSource::new(world)),
        (
            "elberfelder1905",
            TranslationSource::new(dir.path().join("missing.txt")),
        ),
    ]));

    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

/// A file with no verses aborts the load.
#[test]
fn test_empty_file_aborts() {
    let dir = TempDir::new().unwrap();
    let empty = write_text(&dir, "world.txt", "\n\n");

    let result = Registry::load_all(&sources(&[("world", TranslationSource::new(empty))]));

    assert!(matches!(result, Err(LoadError::Empty(_))));
}

/// Invalid UTF-8 is an I/O failure, not a malformed line.
#[test]
fn test_invalid_utf8_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.txt");
    fs::write(&path, b"0#Ruth#1#1#\xff\xfe\n").unwrap();

    let result = Registry::load_all(&sources(&[("world", TranslationSource::new(path))]));

    assert!(matches!(result, Err(LoadError::Io { .. })));
}

/// An unrecognizable identifier without an explicit kind aborts the load.
#[test]
fn test_unknown_kind_aborts() {
    let dir = TempDir::new().unwrap();
    let path = write_text(&dir, "luther.txt", "0#Rut#1#1#Und es begab sich\n");

    let result = Registry::load_all(&sources(&[("luther", TranslationSource::new(path))]));

    assert!(matches!(result, Err(LoadError::UnknownKind { .. })));
}

/// An explicit kind makes any identifier loadable.
#[test]
fn test_explicit_kind() {
    let dir = TempDir::new().unwrap();
    let path = write_text(&dir, "luther.txt", "0#1Mos#1#1#Am Anfang\n");

    let registry = Registry::load_all(&sources(&[(
        "luther",
        TranslationSource::with_kind(path, TranslationKind::Elberfelder1905),
    )]))
    .unwrap();

    let store = registry.get("luther").unwrap();
    assert_eq!(store.get_verse("1. Mose", 1, 1).unwrap(), "Am Anfang");
}

/// Malformed lines are reported per translation but do not abort.
#[test]
fn test_malformed_lines_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_text(
        &dir,
        "world.txt",
        "0#Ruth#1#1#Now it happened\nbroken line\n0#Ruth#1#2#A man\n",
    );

    let registry = Registry::load_all(&sources(&[("world", TranslationSource::new(path))]))
        .unwrap();

    let report = registry.report("world").unwrap();
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
    assert_eq!(registry.total_skipped(), 1);
}

// =============================================================================
// Discovery Tests
// =============================================================================

/// Only recognizable `.txt` files are discovered, keyed by translation id.
#[test]
fn test_discover() {
    let dir = TempDir::new().unwrap();
    write_text(&dir, "elberfelder1905.txt", "0#1Mos#1#1#Im Anfang\n");
    write_text(&dir, "world.txt", "0#Genesis#1#1#In the beginning\n");
    write_text(&dir, "luther1912.txt", "0#1Mos#1#1#Am Anfang\n");
    write_text(&dir, "README.md", "not a translation");

    let found = Registry::discover(dir.path()).unwrap();

    let ids: Vec<&str> = found.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["Elberfelder1905", "world"]);
    assert_eq!(
        found["Elberfelder1905"].kind,
        Some(TranslationKind::Elberfelder1905)
    );
}

/// Discovered translations are reachable under their registry names, and a
/// second file of the same translation is ignored.
#[test]
fn test_discovered_translations_loadable_by_name() {
    let dir = TempDir::new().unwrap();
    write_text(&dir, "elberfelder1905.txt", "0#1Mos#1#1#Im Anfang\n");
    write_text(&dir, "world.txt", "0#Genesis#1#1#In the beginning\n");
    write_text(&dir, "world_2000.txt", "0#Genesis#1#1#At the start\n");

    let registry = Registry::load_all(&Registry::discover(dir.path()).unwrap()).unwrap();

    assert_eq!(registry.list_identifiers(), vec!["Elberfelder1905", "world"]);
    assert_eq!(
        registry
            .get("Elberfelder1905")
            .unwrap()
            .get_verse("1. Mose", 1, 1)
            .unwrap(),
        "Im Anfang"
    );
    assert_eq!(
        registry.get("world").unwrap().get_verse("Genesis", 1, 1).unwrap(),
        "In the beginning"
    );
}

/// Scanning a missing directory fails.
#[test]
fn test_discover_missing_directory() {
    let dir = TempDir::new().unwrap();
    let result = Registry::discover(&dir.path().join("absent"));

    assert!(matches!(result, Err(LoadError::Directory { .. })));
}

// =============================================================================
// Lookup Tests
// =============================================================================

/// An unknown identifier is NotFound.
#[test]
fn test_unknown_translation() {
    let registry = Registry::default();
    assert_eq!(
        registry.get("kjv").unwrap_err(),
        NotFound::Translation("kjv".to_string())
    );
}
