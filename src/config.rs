// src/config.rs
//
// Runtime configuration, read from the environment.
//
//   FILMORATE_DATA_DIR       directory holding the snapshot database
//   FILMORATE_DB_FILE        database file name (default filmorate.db)
//   FILMORATE_POPULAR_COUNT  default size of the popular films list (default 10)

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const DEFAULT_DB_FILE: &str = "filmorate.db";
const DEFAULT_POPULAR_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub popular_default_count: usize,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup("FILMORATE_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| {
                    AppError::Config("Could not determine app data directory".to_string())
                })?
                .join("filmorate"),
        };

        let database_file = lookup("FILMORATE_DB_FILE")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

        let popular_default_count = match lookup("FILMORATE_POPULAR_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "FILMORATE_POPULAR_COUNT must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_POPULAR_COUNT,
        };

        Ok(Self {
            data_dir,
            database_file,
            popular_default_count,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}
