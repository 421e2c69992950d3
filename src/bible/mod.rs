//! Bible text core
//!
//! Loads `#`-delimited translation files into immutable in-memory indexes
//! and answers book/chapter/verse queries.
//!
//! - `parser`: line splitting and index construction
//! - `normalize` / `kind`: per-translation book-name rules
//! - `store`: read-only queries over one translation
//! - `registry`: all translations, loaded once at startup

mod errors;
mod kind;
mod model;
mod normalize;
mod parser;
mod registry;
mod store;

pub use errors::{LoadError, LoadResult, LookupResult, MalformedLine, MalformedReason, NotFound};
pub use kind::TranslationKind;
pub use model::{Book, Chapter, TextIndex};
pub use normalize::{german as normalize_german, identity as normalize_identity};
pub use parser::{parse_file, parse_line, parse_reader, ParseReport, RawVerse, DELIMITER, FIELD_COUNT};
pub use registry::{Registry, TranslationSource, TEXT_EXTENSION};
pub use store::{TranslationStore, TranslationSummary};
