//! Error types for loading and querying Bible texts
//!
//! Three families:
//! - `LoadError`: fatal at startup, aborts registry construction
//! - `MalformedLine`: a single source line that could not be parsed (skipped)
//! - `NotFound`: a query referenced an absent key (per-call, recoverable)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for lookups
pub type LookupResult<T> = Result<T, NotFound>;

/// Errors raised while loading a translation from disk
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source text file does not exist
    #[error("Text file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Source text file could not be read (permissions, invalid UTF-8, ...)
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File was readable but produced no verses
    #[error("No verses loaded from {}", .0.display())]
    Empty(PathBuf),

    /// No translation kind could be resolved for a configured source
    #[error("Unknown translation kind for '{id}'")]
    UnknownKind { id: String },

    /// Texts directory could not be scanned
    #[error("Failed to scan texts directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Map an I/O error for `path`, distinguishing a missing file
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound(path)
        } else {
            LoadError::Io { path, source }
        }
    }

    /// Stable error code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::FileNotFound(_) => "BIBLE_FILE_NOT_FOUND",
            LoadError::Io { .. } => "BIBLE_IO_ERROR",
            LoadError::Empty(_) => "BIBLE_EMPTY_TEXT",
            LoadError::UnknownKind { .. } => "BIBLE_UNKNOWN_KIND",
            LoadError::Directory { .. } => "BIBLE_DIRECTORY_ERROR",
        }
    }
}

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected 5 fields, found {0}")]
    MissingFields(usize),

    #[error("invalid chapter number '{0}'")]
    InvalidChapter(String),

    #[error("invalid verse number '{0}'")]
    InvalidVerse(String),

    #[error("empty book name")]
    EmptyBook,

    #[error("empty verse text")]
    EmptyText,
}

/// A source line that was skipped during parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct MalformedLine {
    /// 1-based line number in the source file
    pub line: usize,
    pub reason: MalformedReason,
}

/// A query referenced a key absent from the loaded texts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("Translation not found: {0}")]
    Translation(String),

    #[error("Book not found: {book}")]
    Book { book: String },

    #[error("Chapter not found: {book} {chapter}")]
    Chapter { book: String, chapter: u32 },

    #[error("Verse not found: {book} {chapter}:{verse}")]
    Verse {
        book: String,
        chapter: u32,
        verse: u32,
    },
}
