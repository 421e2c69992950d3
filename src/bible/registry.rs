//! Registry of loaded translations
//!
//! Built once at startup, then shared read-only with the request layer.
//! Loading is fail-fast: the first translation that cannot be loaded aborts
//! the whole registry, so a partially populated registry is never returned.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{LoadError, LoadResult, LookupResult, NotFound};
use super::kind::TranslationKind;
use super::parser::ParseReport;
use super::store::{TranslationStore, TranslationSummary};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

/// Extension of discoverable text files
pub const TEXT_EXTENSION: &str = "txt";

/// Where a translation's text lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSource {
    pub path: PathBuf,

    /// Explicit kind; inferred from the identifier or file name when absent
    #[serde(default)]
    pub kind: Option<TranslationKind>,
}

impl TranslationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: None,
        }
    }

    pub fn with_kind(path: impl Into<PathBuf>, kind: TranslationKind) -> Self {
        Self {
            path: path.into(),
            kind: Some(kind),
        }
    }

    /// Resolve the kind: explicit, then identifier, then file stem
    pub fn resolve_kind(&self, id: &str) -> LoadResult<TranslationKind> {
        self.kind
            .or_else(|| TranslationKind::infer(id))
            .or_else(|| {
                self.path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(TranslationKind::infer)
            })
            .ok_or_else(|| LoadError::UnknownKind { id: id.to_string() })
    }
}

/// All loaded translations, keyed by identifier
#[derive(Debug, Default)]
pub struct Registry {
    translations: BTreeMap<String, TranslationStore>,
    reports: BTreeMap<String, ParseReport>,
}

impl Registry {
    /// Build a registry from already loaded stores
    pub fn from_stores(stores: impl IntoIterator<Item = TranslationStore>) -> Self {
        let translations = stores
            .into_iter()
            .map(|store| (store.id().to_string(), store))
            .collect();
        Self {
            translations,
            reports: BTreeMap::new(),
        }
    }

    /// Load every source. Stops at the first failure.
    pub fn load_all(sources: &BTreeMap<String, TranslationSource>) -> LoadResult<Self> {
        let mut translations = BTreeMap::new();
        let mut reports = BTreeMap::new();

        for (id, source) in sources {
            let (store, report) = Self::load_one(id, source)?;
            translations.insert(id.clone(), store);
            reports.insert(id.clone(), report);
        }

        Ok(Self {
            translations,
            reports,
        })
    }

    fn load_one(id: &str, source: &TranslationSource) -> LoadResult<(TranslationStore, ParseReport)> {
        let path = source.path.display().to_string();
        let scope = ObservationScope::with_fields("TRANSLATION_LOAD", &[("id", id), ("path", &path)]);

        let loaded = source
            .resolve_kind(id)
            .and_then(|kind| TranslationStore::load(id, kind, &source.path));

        let (store, report) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e);
            }
        };

        for malformed in &report.skipped {
            log_event_with_fields(
                Event::MalformedLineSkipped,
                &[
                    ("id", id),
                    ("line", &malformed.line.to_string()),
                    ("reason", &malformed.reason.to_string()),
                ],
            );
        }

        scope.complete_with_fields(&[
            ("books", &store.book_count().to_string()),
            ("kind", store.kind().as_str()),
            ("skipped", &report.skipped.len().to_string()),
            ("verses", &store.total_verses().to_string()),
        ]);

        Ok((store, report))
    }

    /// Scan `dir` for `*.txt` files whose names identify a known translation.
    ///
    /// Each file is registered under its kind's identifier (`world`,
    /// `Elberfelder1905`, `Schlachter1951`). Files are visited in path order;
    /// a later file resolving to an already discovered kind is skipped with a
    /// warning, as are files matching no known translation.
    pub fn discover(dir: &Path) -> LoadResult<BTreeMap<String, TranslationSource>> {
        let dir_error = |e| LoadError::Directory {
            path: dir.to_path_buf(),
            source: e,
        };

        let mut paths = fs::read_dir(dir)
            .map_err(dir_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(dir_error)?;
        paths.sort();

        let mut sources: BTreeMap<String, TranslationSource> = BTreeMap::new();
        for path in paths {
            if path.extension().map_or(true, |ext| ext != TEXT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let file = path.display().to_string();

            let Some(kind) = TranslationKind::infer(stem) else {
                log_event_with_fields(
                    Event::TranslationSkipped,
                    &[("file", &file), ("reason", "no matching translation")],
                );
                continue;
            };

            if let Some(existing) = sources.get(kind.id()) {
                log_event_with_fields(
                    Event::TranslationSkipped,
                    &[
                        ("file", &file),
                        ("id", kind.id()),
                        ("kept", &existing.path.display().to_string()),
                        ("reason", "duplicate translation"),
                    ],
                );
                continue;
            }

            log_event_with_fields(
                Event::TranslationDiscovered,
                &[("file", &file), ("id", kind.id()), ("kind", kind.as_str())],
            );
            sources.insert(kind.id().to_string(), TranslationSource::with_kind(path, kind));
        }

        Ok(sources)
    }

    pub fn get(&self, id: &str) -> LookupResult<&TranslationStore> {
        self.translations
            .get(id)
            .ok_or_else(|| NotFound::Translation(id.to_string()))
    }

    /// Identifiers, sorted
    pub fn list_identifiers(&self) -> Vec<&str> {
        self.translations.keys().map(String::as_str).collect()
    }

    /// Parse report of a translation loaded from disk
    pub fn report(&self, id: &str) -> Option<&ParseReport> {
        self.reports.get(id)
    }

    pub fn summaries(&self) -> Vec<TranslationSummary> {
        self.translations.values().map(TranslationStore::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn total_verses(&self) -> usize {
        self.translations.values().map(TranslationStore::total_verses).sum()
    }

    /// Malformed lines skipped across all loads
    pub fn total_skipped(&self) -> usize {
        self.reports.values().map(|r| r.skipped.len()).sum()
    }
}
