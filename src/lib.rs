//! bibleserve - Bible text lookup service
//!
//! Loads `#`-delimited translation files once at startup and answers
//! book, chapter and verse queries over a read-only HTTP API.

pub mod bible;
pub mod cli;
pub mod http_server;
pub mod observability;
