//! CLI module for bibleserve
//!
//! Provides command-line interface for:
//! - serve: Load translations and serve the HTTP API
//! - check: Load translations and print a summary
//! - lookup: One-shot chapter or verse lookup

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{answer, boot, check, lookup, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
