//! Observability subsystem
//!
//! - Structured logging (one JSON object per line)
//! - Lifecycle events
//! - Atomic counters
//!
//! Observability is read-only: it never influences loading or lookups,
//! and a failed log write is ignored.
//!
//! ```ignore
//! use bibleserve::observability::{Logger, Event, log_event_with_fields};
//!
//! Logger::info("CONFIG_LOADED", &[("path", "bibleserve.json")]);
//! log_event_with_fields(Event::RegistryLoaded, &[("translations", "3")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

fn severity_of(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_of(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}
