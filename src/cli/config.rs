//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080 },
//!   "texts_dir": "texts",
//!   "translations": { "world": { "path": "texts/world.txt" } }
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bible::{Registry, TranslationSource};
use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Directory scanned for `*.txt` translations (optional)
    #[serde(default)]
    pub texts_dir: Option<PathBuf>,

    /// Explicitly configured translations (optional)
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationSource>,

    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_json(&content, base_dir)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str, base_dir: impl Into<PathBuf>) -> CliResult<Self> {
        let mut config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;
        config.base_dir = base_dir.into();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.texts_dir.is_none() && self.translations.is_empty() {
            return Err(CliError::config_error(
                "Either texts_dir or translations must be configured",
            ));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        for (id, source) in &self.translations {
            if id.trim().is_empty() {
                return Err(CliError::config_error("Translation identifier must not be empty"));
            }
            if source.path.as_os_str().is_empty() {
                return Err(CliError::config_error(format!(
                    "Translation '{}' has an empty path",
                    id
                )));
            }
        }

        Ok(())
    }

    /// Directory relative paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Resolved texts directory, if configured
    pub fn texts_path(&self) -> Option<PathBuf> {
        self.texts_dir.as_deref().map(|dir| self.resolve(dir))
    }

    /// Every translation to load: discovered files first, then explicit
    /// entries, which replace a discovered file with the same identifier.
    pub fn translation_sources(&self) -> CliResult<BTreeMap<String, TranslationSource>> {
        let mut sources = match self.texts_path() {
            Some(dir) => Registry::discover(&dir)?,
            None => BTreeMap::new(),
        };

        for (id, source) in &self.translations {
            let resolved = TranslationSource {
                path: self.resolve(&source.path),
                kind: source.kind,
            };
            sources.insert(id.clone(), resolved);
        }

        Ok(sources)
    }
}
