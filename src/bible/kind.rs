//! Translation kinds
//!
//! The set of supported translations is closed. Each kind carries its
//! display name and selects the book-name normalization used on load and
//! on query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize;

/// A supported Bible translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKind {
    /// World English Bible
    #[serde(alias = "World")]
    World,
    /// Elberfelder 1905 (German)
    #[serde(alias = "Elberfelder1905")]
    Elberfelder1905,
    /// Schlachter 1951 (German)
    #[serde(alias = "Schlachter1951")]
    Schlachter1951,
}

impl TranslationKind {
    /// All kinds, in discovery priority order
    pub const ALL: [TranslationKind; 3] = [
        TranslationKind::Elberfelder1905,
        TranslationKind::World,
        TranslationKind::Schlachter1951,
    ];

    /// Lowercase token used in config files and file-name matching
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKind::World => "world",
            TranslationKind::Elberfelder1905 => "elberfelder1905",
            TranslationKind::Schlachter1951 => "schlachter1951",
        }
    }

    /// Registry identifier of a discovered translation
    pub fn id(&self) -> &'static str {
        match self {
            TranslationKind::World => "world",
            TranslationKind::Elberfelder1905 => "Elberfelder1905",
            TranslationKind::Schlachter1951 => "Schlachter1951",
        }
    }

    /// Human-readable translation name
    pub fn display_name(&self) -> &'static str {
        match self {
            TranslationKind::World => "World English Bible",
            TranslationKind::Elberfelder1905 => "Elberfelder1905",
            TranslationKind::Schlachter1951 => "Schlachter1951",
        }
    }

    /// Canonicalize a book name for this translation
    pub fn normalize_book(&self, name: &str) -> String {
        match self {
            TranslationKind::World => normalize::identity(name),
            TranslationKind::Elberfelder1905 | TranslationKind::Schlachter1951 => {
                normalize::german(name)
            }
        }
    }

    /// Infer a kind from an identifier or file stem.
    ///
    /// Case-insensitive substring match, first hit in `ALL` order wins.
    pub fn infer(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lowered.contains(kind.as_str()))
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TranslationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown translation kind '{}'", s))
    }
}
