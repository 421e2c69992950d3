//! Translation Query Tests
//!
//! Tests for lookup invariants:
//! - Chapters list verses in ascending order
//! - Counts agree with listed contents
//! - Every absent key combination is NotFound
//! - Book names normalize the same way at load and at query time

use bibleserve::bible::{parse_reader, NotFound, TranslationKind, TranslationStore};
use std::io::Cursor;

// =============================================================================
// Helper Functions
// =============================================================================

fn store(kind: TranslationKind, content: &str) -> TranslationStore {
    let (index, _) =
        parse_reader(Cursor::new(content), |name| kind.normalize_book(name)).unwrap();
    TranslationStore::new(kind.as_str(), kind, index)
}

fn elberfelder() -> TranslationStore {
    store(
        TranslationKind::Elberfelder1905,
        "\
0#1Mos#1#3#Und Gott sprach: Es werde Licht! und es ward Licht.
0#1. Mose#1#1#Im Anfang schuf Gott die Himmel und die Erde.
0#Genesis#1#2#Und die Erde war wüst und leer.
0#1. Mose#2#1#So wurden vollendet die Himmel und die Erde.
1#Johannes#3#16#Denn also hat Gott die Welt geliebt.
",
    )
}

// =============================================================================
// Chapter Tests
// =============================================================================

/// The canonical example: two verses, one chapter.
#[test]
fn test_two_verse_chapter() {
    let store = store(
        TranslationKind::World,
        "0#1. Mose#1#1#In the beginning...\n0#1. Mose#1#2#Now the earth...\n",
    );

    assert_eq!(
        store.get_chapter("1. Mose", 1).unwrap(),
        vec![(1, "In the beginning..."), (2, "Now the earth...")]
    );
    assert_eq!(store.get_chapter_count("1. Mose").unwrap(), 1);
}

/// Verses come back ascending regardless of file order.
#[test]
fn test_chapter_ascending() {
    let store = elberfelder();
    let verses: Vec<u32> = store
        .get_chapter("1. Mose", 1)
        .unwrap()
        .into_iter()
        .map(|(n, _)| n)
        .collect();

    assert_eq!(verses, vec![1, 2, 3]);
}

/// Verse count matches the chapter listing.
#[test]
fn test_verse_count_matches_chapter() {
    let store = elberfelder();
    for (book, chapter) in [("1. Mose", 1), ("1. Mose", 2), ("Johannes", 3)] {
        assert_eq!(
            store.get_verse_count(book, chapter).unwrap(),
            store.get_chapter(book, chapter).unwrap().len()
        );
    }
}

/// Chapter count matches the chapter numbers.
#[test]
fn test_chapter_count_matches_numbers() {
    let store = elberfelder();
    assert_eq!(store.get_chapter_count("1. Mose").unwrap(), 2);
    assert_eq!(store.chapter_numbers("1. Mose").unwrap(), vec![1, 2]);
}

// =============================================================================
// Normalization Tests
// =============================================================================

/// Aliases used in the file collapse onto one book.
#[test]
fn test_aliases_merge_at_load() {
    let store = elberfelder();
    assert_eq!(store.list_book_names(), vec!["1. Mose", "Johannes"]);
}

/// Aliases resolve the same way at query time.
#[test]
fn test_aliases_resolve_at_query() {
    let store = elberfelder();
    let expected = store.get_verse("1. Mose", 1, 1).unwrap();

    for alias in ["1Mos", "Genesis", "1.Mose", "1 Mose", "  1. Mose "] {
        assert_eq!(store.get_verse(alias, 1, 1).unwrap(), expected, "alias {alias}");
    }
}

/// The World translation matches names exactly.
#[test]
fn test_world_is_exact() {
    let store = store(TranslationKind::World, "0#Genesis#1#1#In the beginning\n");

    assert!(store.get_book("Genesis").is_ok());
    assert!(matches!(store.get_book("genesis"), Err(NotFound::Book { .. })));
    assert!(matches!(store.get_book("1. Mose"), Err(NotFound::Book { .. })));
}

// =============================================================================
// NotFound Tests
// =============================================================================

/// Every absent level reports the level that failed.
#[test]
fn test_not_found_combinations() {
    let store = elberfelder();

    assert_eq!(
        store.get_chapter("Offenbarung", 1).unwrap_err(),
        NotFound::Book {
            book: "Offenbarung".to_string()
        }
    );
    assert_eq!(
        store.get_chapter("1. Mose", 50).unwrap_err(),
        NotFound::Chapter {
            book: "1. Mose".to_string(),
            chapter: 50
        }
    );
    assert_eq!(
        store.get_verse("1. Mose", 1, 99).unwrap_err(),
        NotFound::Verse {
            book: "1. Mose".to_string(),
            chapter: 1,
            verse: 99
        }
    );
    assert!(matches!(
        store.get_verse("Offenbarung", 1, 1),
        Err(NotFound::Book { .. })
    ));
    assert!(matches!(
        store.get_verse_count("1. Mose", 3),
        Err(NotFound::Chapter { .. })
    ));
    assert!(matches!(
        store.get_chapter_count("Offenbarung"),
        Err(NotFound::Book { .. })
    ));
}

/// Not-found messages name the normalized book.
#[test]
fn test_not_found_message_uses_canonical_name() {
    let store = elberfelder();
    let err = store.get_verse("1Mos", 1, 99).unwrap_err();
    assert_eq!(err.to_string(), "Verse not found: 1. Mose 1:99");
}
