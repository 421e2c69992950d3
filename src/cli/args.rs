//! CLI argument definitions using clap
//!
//! Commands:
//! - bibleserve serve --config <path> [--port <port>]
//! - bibleserve check --config <path>
//! - bibleserve lookup --config <path> --translation <id> --book <name> --chapter <n> [--verse <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bibleserve - Bible text lookup service
#[derive(Parser, Debug)]
#[command(name = "bibleserve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load all translations and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bibleserve.json")]
        config: PathBuf,

        /// Override the port from the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load all translations, print a summary and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./bibleserve.json")]
        config: PathBuf,
    },

    /// Look up a chapter or a single verse and exit
    Lookup {
        /// Path to configuration file
        #[arg(long, default_value = "./bibleserve.json")]
        config: PathBuf,

        /// Translation identifier
        #[arg(long)]
        translation: String,

        /// Book name, as written in the translation or an alias
        #[arg(long)]
        book: String,

        /// Chapter number
        #[arg(long)]
        chapter: u32,

        /// Verse number; the whole chapter is printed when omitted
        #[arg(long)]
        verse: Option<u32>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["bibleserve", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./bibleserve.json"));
                assert_eq!(port, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_args() {
        let cli = Cli::try_parse_from([
            "bibleserve",
            "lookup",
            "--translation",
            "world",
            "--book",
            "1. Mose",
            "--chapter",
            "1",
            "--verse",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Lookup {
                translation,
                book,
                chapter,
                verse,
                ..
            } => {
                assert_eq!(translation, "world");
                assert_eq!(book, "1. Mose");
                assert_eq!(chapter, 1);
                assert_eq!(verse, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_rejects_non_numeric_chapter() {
        let result = Cli::try_parse_from([
            "bibleserve",
            "lookup",
            "--translation",
            "world",
            "--book",
            "Ruth",
            "--chapter",
            "one",
        ]);
        assert!(result.is_err());
    }
}
