//! Translation store
//!
//! Wraps one fully parsed translation and answers read-only queries.
//! Every book-name argument is normalized with the translation's rule
//! before lookup, the same rule applied when the text was loaded.

use std::path::Path;

use serde::Serialize;

use super::errors::{LoadError, LoadResult, LookupResult, NotFound};
use super::kind::TranslationKind;
use super::model::{Book, TextIndex};
use super::parser::{self, ParseReport};

/// One loaded translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStore {
    id: String,
    kind: TranslationKind,
    index: TextIndex,
}

/// Per-translation summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationSummary {
    pub id: String,
    pub name: String,
    pub kind: TranslationKind,
    pub books: usize,
    pub verses: usize,
}

impl TranslationStore {
    /// Wrap an already parsed index
    pub fn new(id: impl Into<String>, kind: TranslationKind, index: TextIndex) -> Self {
        Self {
            id: id.into(),
            kind,
            index,
        }
    }

    /// Parse `path` and build a store.
    ///
    /// A file that yields no verses is rejected with `LoadError::Empty`.
    pub fn load(
        id: impl Into<String>,
        kind: TranslationKind,
        path: &Path,
    ) -> LoadResult<(Self, ParseReport)> {
        let (index, report) = parser::parse_file(path, kind)?;
        if index.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }
        Ok((Self::new(id, kind, index), report))
    }

    /// Registry identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TranslationKind {
        self.kind
    }

    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Underlying parsed data
    pub fn index(&self) -> &TextIndex {
        &self.index
    }

    pub fn book_count(&self) -> usize {
        self.index.book_count()
    }

    pub fn total_verses(&self) -> usize {
        self.index.verse_count()
    }

    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            id: self.id.clone(),
            name: self.display_name().to_string(),
            kind: self.kind,
            books: self.book_count(),
            verses: self.total_verses(),
        }
    }

    /// Apply this translation's book-name rule
    pub fn normalize_book(&self, name: &str) -> String {
        self.kind.normalize_book(name)
    }

    /// All book names, in source order
    pub fn list_book_names(&self) -> Vec<&str> {
        self.index.book_names().collect()
    }

    pub fn get_book(&self, name: &str) -> LookupResult<&Book> {
        let key = self.normalize_book(name);
        self.index
            .book(&key)
            .ok_or(NotFound::Book { book: key })
    }

    pub fn get_chapter_count(&self, book: &str) -> LookupResult<usize> {
        Ok(self.get_book(book)?.chapter_count())
    }

    /// Chapter numbers of a book, ascending
    pub fn chapter_numbers(&self, book: &str) -> LookupResult<Vec<u32>> {
        Ok(self.get_book(book)?.chapter_numbers().collect())
    }

    /// Verses of a chapter, ascending by verse number
    pub fn get_chapter(&self, book: &str, chapter: u32) -> LookupResult<Vec<(u32, &str)>> {
        let key = self.normalize_book(book);
        let chapter_data = self
            .index
            .book(&key)
            .ok_or_else(|| NotFound::Book { book: key.clone() })?
            .chapter(chapter)
            .ok_or(NotFound::Chapter { book: key, chapter })?;
        Ok(chapter_data.verses().collect())
    }

    pub fn get_verse_count(&self, book: &str, chapter: u32) -> LookupResult<usize> {
        Ok(self.get_chapter(book, chapter)?.len())
    }

    pub fn get_verse(&self, book: &str, chapter: u32, verse: u32) -> LookupResult<&str> {
        let key = self.normalize_book(book);
        let book_data = self
            .index
            .book(&key)
            .ok_or_else(|| NotFound::Book { book: key.clone() })?;
        let chapter_data = book_data.chapter(chapter).ok_or_else(|| NotFound::Chapter {
            book: key.clone(),
            chapter,
        })?;
        chapter_data.verse(verse).ok_or(NotFound::Verse {
            book: key,
            chapter,
            verse,
        })
    }
}
