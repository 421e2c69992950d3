//! # HTTP Server Module
//!
//! Read-only JSON API over the loaded translations.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/info` - Service description
//! - `/observability/metrics` - Counters
//! - `/api/v1/translations/...` - Translations, books, chapters, verses

pub mod bible_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{HttpServer, API_PREFIX};
pub use state::AppState;
