//! CLI command implementations
//!
//! Every command follows the same boot sequence:
//! 1. Load and validate the configuration
//! 2. Resolve translation sources (texts directory, then explicit entries)
//! 3. Load every translation, aborting on the first failure
//!
//! Only then does a command serve, summarize or answer a lookup.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::bible::{LookupResult, Registry};
use crate::http_server::bible_routes::{ChapterResponse, VerseEntry, VerseResponse};
use crate::http_server::{AppState, HttpServer};
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
        Command::Lookup {
            config,
            translation,
            book,
            chapter,
            verse,
        } => lookup(&config, &translation, &book, chapter, verse),
    }
}

/// Load configuration and registry, logging the startup outcome
pub fn boot(config_path: &Path) -> CliResult<(Config, Registry)> {
    log_event_with_fields(
        Event::StartupBegin,
        &[("config", &config_path.display().to_string())],
    );

    let booted = load_config_and_registry(config_path);

    if let Err(e) = &booted {
        log_event_with_fields(
            Event::StartupFailed,
            &[("code", e.code_str()), ("error", e.message())],
        );
    }

    booted
}

fn load_config_and_registry(config_path: &Path) -> CliResult<(Config, Registry)> {
    let config = Config::load(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("path", &config_path.display().to_string()),
            ("translations", &config.translations.len().to_string()),
        ],
    );

    let sources = config.translation_sources()?;
    if sources.is_empty() {
        return Err(CliError::load_failed("No translations found to load"));
    }

    let registry = Registry::load_all(&sources)?;
    log_event_with_fields(
        Event::RegistryLoaded,
        &[
            ("translations", &registry.len().to_string()),
            ("verses", &registry.total_verses().to_string()),
            ("skipped", &registry.total_skipped().to_string()),
        ],
    );

    Ok((config, registry))
}

/// Load every translation and serve the HTTP API until the process exits
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (config, registry) = boot(config_path)?;

    let mut http_config = config.server;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("--port must be > 0"));
        }
        http_config.port = port;
    }

    let state = Arc::new(AppState::new(registry));
    let server = HttpServer::with_config(http_config, state);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load every translation, print a summary and exit
pub fn check(config_path: &Path) -> CliResult<()> {
    Logger::set_threshold(Severity::Error);

    let (_config, registry) = boot(config_path)?;

    let translations: Vec<_> = registry
        .summaries()
        .into_iter()
        .map(|summary| {
            let skipped: Vec<String> = registry
                .report(&summary.id)
                .map(|report| report.skipped.iter().map(ToString::to_string).collect())
                .unwrap_or_default();
            json!({
                "id": summary.id,
                "name": summary.name,
                "kind": summary.kind,
                "books": summary.books,
                "verses": summary.verses,
                "skipped": skipped,
            })
        })
        .collect();

    write_response(json!({
        "translations": translations,
        "total_verses": registry.total_verses(),
        "total_skipped": registry.total_skipped(),
    }))
}

/// Answer a single chapter or verse lookup and exit
///
/// An absent translation, book, chapter or verse is printed as a JSON error
/// object and also returned, so the process exits non-zero.
pub fn lookup(
    config_path: &Path,
    translation: &str,
    book: &str,
    chapter: u32,
    verse: Option<u32>,
) -> CliResult<()> {
    Logger::set_threshold(Severity::Error);

    let (_config, registry) = boot(config_path)?;

    match answer(&registry, translation, book, chapter, verse) {
        Ok(data) => {
            log_event(Event::LookupServed);
            write_response(data)
        }
        Err(not_found) => {
            log_event_with_fields(Event::LookupNotFound, &[("reason", &not_found.to_string())]);
            let err = CliError::from(not_found);
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}

/// Resolve a lookup against the registry as a JSON value
pub fn answer(
    registry: &Registry,
    translation: &str,
    book: &str,
    chapter: u32,
    verse: Option<u32>,
) -> LookupResult<serde_json::Value> {
    let store = registry.get(translation)?;
    let canonical = store.normalize_book(book);

    let value = match verse {
        Some(verse) => json!(VerseResponse {
            translation: translation.to_string(),
            chapter,
            verse,
            text: store.get_verse(book, chapter, verse)?.to_string(),
            book: canonical,
        }),
        None => {
            let verses: Vec<VerseEntry> = store
                .get_chapter(book, chapter)?
                .into_iter()
                .map(|(verse, text)| VerseEntry {
                    verse,
                    text: text.to_string(),
                })
                .collect();
            json!(ChapterResponse {
                translation: translation.to_string(),
                book: canonical,
                chapter,
                verse_count: verses.len(),
                verses,
            })
        }
    };

    Ok(value)
}
