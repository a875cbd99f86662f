//! Database configuration for runtime backend selection.
//!
//! Supports CozoDB with SQLite storage (the default) and in-memory CozoDB for
//! tests and throwaway demo sessions.

use std::error::Error;
use std::path::PathBuf;

use tracing::debug;

use super::backend::DatabaseBackend;
use super::connection::CozoBackend;

/// Environment variable consulted when no flag or config file names a database.
pub const DATABASE_URL_ENV: &str = "HOSPITAL_DB_URL";

/// Default on-disk database location.
pub const DEFAULT_DB_PATH: &str = "./hospital.sqlite";

/// Configuration for database backend selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage.
    CozoSqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage.
    CozoMem,
}

impl DatabaseConfig {
    /// Create a backend instance from this configuration.
    pub fn connect(&self) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        debug!(config = ?self, "opening database");
        let backend = match self {
            Self::CozoSqlite { path } => CozoBackend::sqlite(path)?,
            Self::CozoMem => CozoBackend::mem()?,
        };
        Ok(Box::new(backend))
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → CozoSqlite
    /// - `sqlite:///path/to/db` → CozoSqlite
    /// - `:memory:` or `mem://` → CozoMem
    pub fn from_url(url: &str) -> Result<Self, Box<dyn Error>> {
        if url == ":memory:" || url == "mem://" {
            return Ok(Self::CozoMem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err("sqlite:// URL is missing a path".into());
            }
            return Ok(Self::CozoSqlite {
                path: PathBuf::from(path),
            });
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(format!("Unsupported database scheme: {}://", scheme).into());
        }

        if url.is_empty() {
            return Err("Database path is empty".into());
        }

        Ok(Self::CozoSqlite {
            path: PathBuf::from(url),
        })
    }

    /// Load from the `HOSPITAL_DB_URL` environment variable, if set.
    pub fn from_env() -> Result<Option<Self>, Box<dyn Error>> {
        match std::env::var(DATABASE_URL_ENV) {
            Ok(url) => Ok(Some(Self::from_url(&url)?)),
            Err(_) => Ok(None),
        }
    }

    /// Resolve configuration.
    ///
    /// Priority: explicit `--db` value > `.hospital_db.json` > environment > `./hospital.sqlite`.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, Box<dyn Error>> {
        if let Some(url) = explicit {
            return Self::from_url(url);
        }

        if let Ok(config_file) = crate::config::ConfigFile::load() {
            return Ok(config_file.database.to_database_config());
        }

        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }

        Self::from_url(DEFAULT_DB_PATH)
    }
}
