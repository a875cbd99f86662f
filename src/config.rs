//! Configuration file handling for database connections.
//!
//! This module provides loading and parsing of `.hospital_db.json` configuration files.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::db::DatabaseConfig;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".hospital_db.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database configuration
    pub database: DatabaseConfigFile,
}

/// Database configuration variants.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite backend with file path
    Sqlite { path: PathBuf },
    /// In-memory backend, discarded on exit
    #[serde(rename = "memory")]
    Mem,
}

impl ConfigFile {
    /// Load configuration from `.hospital_db.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Err(format!(
                "Configuration file not found: {CONFIG_FILE_NAME}\n\n\
                 Examples:\n\
                 \n\
                 SQLite:\n\
                 {{\n  \
                   \"database\": {{\n    \
                     \"type\": \"sqlite\",\n    \
                     \"path\": \"./hospital.sqlite\"\n  \
                   }}\n\
                 }}\n\
                 \n\
                 In-memory:\n\
                 {{\n  \
                   \"database\": {{\n    \
                     \"type\": \"memory\"\n  \
                   }}\n\
                 }}\n"
            )
            .into());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read {}: {}", CONFIG_FILE_NAME, e))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", CONFIG_FILE_NAME, e))?;

        Ok(config)
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::CozoSqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::CozoMem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // Tests that change the working directory must not run concurrently.
    fn cwd_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load_in(dir: &tempfile::TempDir) -> Result<ConfigFile, Box<dyn Error>> {
        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        let result = ConfigFile::load();
        std::env::set_current_dir(old_dir).unwrap();
        result
    }

    #[test]
    fn test_sqlite_deserialization() {
        let json = r#"
        {
            "database": {
                "type": "sqlite",
                "path": "./hospital.sqlite"
            }
        }
        "#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.database,
            DatabaseConfigFile::Sqlite {
                path: PathBuf::from("./hospital.sqlite")
            }
        );
    }

    #[test]
    fn test_memory_deserialization() {
        let json = r#"{ "database": { "type": "memory" } }"#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.database, DatabaseConfigFile::Mem);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{ "database": { "type": "postgres" } }"#;
        assert!(serde_json::from_str::<ConfigFile>(json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let _lock = cwd_lock();
        let temp_dir = tempfile::tempdir().unwrap();

        let err = load_in(&temp_dir).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_invalid_json() {
        let _lock = cwd_lock();
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{ invalid json }").unwrap();

        let err = load_in(&temp_dir).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON in .hospital_db.json"));
    }

    #[test]
    fn test_load_valid_sqlite_file() {
        let _lock = cwd_lock();
        let temp_dir = tempfile::tempdir().unwrap();
        let json = r#"{ "database": { "type": "sqlite", "path": "./ward.sqlite" } }"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), json).unwrap();

        let config = load_in(&temp_dir).unwrap();
        assert!(matches!(config.database, DatabaseConfigFile::Sqlite { .. }));
    }

    #[test]
    fn test_to_database_config_sqlite() {
        let config_file = DatabaseConfigFile::Sqlite {
            path: PathBuf::from("/tmp/test.db"),
        };
        assert_eq!(
            config_file.to_database_config(),
            DatabaseConfig::CozoSqlite {
                path: PathBuf::from("/tmp/test.db")
            }
        );
    }

    #[test]
    fn test_to_database_config_memory() {
        assert_eq!(DatabaseConfigFile::Mem.to_database_config(), DatabaseConfig::CozoMem);
    }
}
