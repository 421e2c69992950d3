//! Shared application state
//!
//! Built once after the registry has loaded, then shared by every handler
//! behind an `Arc`. Nothing in here is mutated except the atomic counters.

use chrono::{DateTime, Utc};

use crate::bible::{NotFound, Registry};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};

use super::errors::ApiResult;

/// State handed to the request layer
#[derive(Debug)]
pub struct AppState {
    registry: Registry,
    metrics: MetricsRegistry,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Wrap a fully loaded registry, seeding the load counters from it
    pub fn new(registry: Registry) -> Self {
        let metrics = MetricsRegistry::new();
        for id in registry.list_identifiers() {
            let verses = registry.get(id).map(|t| t.total_verses()).unwrap_or(0);
            let skipped = registry.report(id).map(|r| r.skipped.len()).unwrap_or(0);
            metrics.record_translation(verses as u64, skipped as u64);
        }

        Self {
            registry,
            metrics,
            started_at: Utc::now(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Count a lookup outcome and convert it for the HTTP layer
    pub fn track<T>(&self, result: Result<T, NotFound>) -> ApiResult<T> {
        match result {
            Ok(value) => {
                self.metrics.increment_lookups_served();
                log_event(Event::LookupServed);
                Ok(value)
            }
            Err(not_found) => {
                self.metrics.increment_lookups_not_found();
                log_event_with_fields(
                    Event::LookupNotFound,
                    &[("reason", &not_found.to_string())],
                );
                Err(not_found.into())
            }
        }
    }
}
