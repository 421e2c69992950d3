//! Observable lifecycle events
//!
//! Events are explicit and typed; their string form is the `event` field
//! of a log line.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    /// Process startup begins
    StartupBegin,
    /// Configuration file parsed and validated
    ConfigLoaded,
    /// Startup aborted (FATAL)
    StartupFailed,

    // Loading
    /// A text file in the texts directory matched a translation
    TranslationDiscovered,
    /// A text file in the texts directory matched no translation
    TranslationSkipped,
    /// A source line could not be parsed and was skipped
    MalformedLineSkipped,
    /// All translations loaded
    RegistryLoaded,

    // Serving
    /// HTTP server bound and serving
    Serving,
    /// A lookup returned data
    LookupServed,
    /// A lookup referenced an absent key
    LookupNotFound,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "BIBLESERVE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StartupFailed => "BIBLESERVE_STARTUP_FAILED",
            Event::TranslationDiscovered => "TRANSLATION_DISCOVERED",
            Event::TranslationSkipped => "TRANSLATION_SKIPPED",
            Event::MalformedLineSkipped => "MALFORMED_LINE_SKIPPED",
            Event::RegistryLoaded => "REGISTRY_LOADED",
            Event::Serving => "BIBLESERVE_SERVING",
            Event::LookupServed => "LOOKUP_SERVED",
            Event::LookupNotFound => "LOOKUP_NOT_FOUND",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StartupFailed)
    }

    /// Returns true if this event reports a recoverable problem
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::TranslationSkipped | Event::MalformedLineSkipped)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::StartupBegin,
            Event::ConfigLoaded,
            Event::StartupFailed,
            Event::TranslationDiscovered,
            Event::TranslationSkipped,
            Event::MalformedLineSkipped,
            Event::RegistryLoaded,
            Event::Serving,
            Event::LookupServed,
            Event::LookupNotFound,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_and_warning_events() {
        assert!(Event::StartupFailed.is_fatal());
        assert!(!Event::RegistryLoaded.is_fatal());
        assert!(Event::MalformedLineSkipped.is_warning());
        assert!(!Event::LookupNotFound.is_warning());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::Serving), "BIBLESERVE_SERVING");
    }
}
