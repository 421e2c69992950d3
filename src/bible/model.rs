//! In-memory verse structure
//!
//! book name -> chapter number -> verse number -> text.
//! Built once by the parser, never mutated after a translation is stored.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Verses of one chapter, keyed by verse number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chapter {
    verses: BTreeMap<u32, String>,
}

impl Chapter {
    /// Text of a verse
    pub fn verse(&self, number: u32) -> Option<&str> {
        self.verses.get(&number).map(String::as_str)
    }

    /// Verses in ascending order
    pub fn verses(&self) -> impl Iterator<Item = (u32, &str)> {
        self.verses.iter().map(|(n, text)| (*n, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    fn insert(&mut self, verse: u32, text: String) -> Option<String> {
        self.verses.insert(verse, text)
    }
}

/// Chapters of one book, keyed by chapter number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Book {
    chapters: BTreeMap<u32, Chapter>,
}

impl Book {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    /// Chapter numbers in ascending order
    pub fn chapter_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.chapters.keys().copied()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Total verses across all chapters
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Chapter::len).sum()
    }
}

/// All books of one translation
///
/// Book names are remembered in first-appearance order so listings follow
/// the order of the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextIndex {
    books: HashMap<String, Book>,
    order: Vec<String>,
}

impl TextIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a verse. Returns true if an existing verse was overwritten.
    pub fn insert(&mut self, book: String, chapter: u32, verse: u32, text: String) -> bool {
        if !self.books.contains_key(&book) {
            self.order.push(book.clone());
        }
        self.books
            .entry(book)
            .or_default()
            .chapters
            .entry(chapter)
            .or_default()
            .insert(verse, text)
            .is_some()
    }

    pub fn book(&self, name: &str) -> Option<&Book> {
        self.books.get(name)
    }

    /// Book names in first-appearance order
    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn book_count(&self) -> usize {
        self.order.len()
    }

    /// Total verses across all books
    pub fn verse_count(&self) -> usize {
        self.books.values().map(Book::verse_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_nested_entries() {
        let mut index = TextIndex::new();
        index.insert("1. Mose".into(), 1, 1, "Im Anfang".into());
        index.insert("1. Mose".into(), 2, 1, "Und die Himmel".into());

        let book = index.book("1. Mose").unwrap();
        assert_eq!(book.chapter_count(), 2);
        assert_eq!(book.chapter(1).unwrap().verse(1), Some("Im Anfang"));
        assert_eq!(index.verse_count(), 2);
    }

    #[test]
    fn test_insert_overwrites_duplicate_key() {
        let mut index = TextIndex::new();
        assert!(!index.insert("Ruth".into(), 1, 1, "first".into()));
        assert!(index.insert("Ruth".into(), 1, 1, "second".into()));

        let chapter = index.book("Ruth").unwrap().chapter(1).unwrap();
        assert_eq!(chapter.len(), 1);
        assert_eq!(chapter.verse(1), Some("second"));
    }

    #[test]
    fn test_book_order_is_first_appearance() {
        let mut index = TextIndex::new();
        index.insert("Genesis".into(), 1, 1, "a".into());
        index.insert("Exodus".into(), 1, 1, "b".into());
        index.insert("Genesis".into(), 1, 2, "c".into());
        index.insert("Leviticus".into(), 1, 1, "d".into());

        let names: Vec<_> = index.book_names().collect();
        assert_eq!(names, vec!["Genesis", "Exodus", "Leviticus"]);
    }

    #[test]
    fn test_chapter_verses_sorted_regardless_of_insert_order() {
        let mut index = TextIndex::new();
        for verse in [3, 1, 10, 2] {
            index.insert("Ruth".into(), 1, verse, format!("v{}", verse));
        }

        let chapter = index.book("Ruth").unwrap().chapter(1).unwrap();
        let numbers: Vec<_> = chapter.verses().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3, 10]);
    }
}
