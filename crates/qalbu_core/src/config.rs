//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values behave like unset ones.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::env;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "QALBU_DB_PATH";
pub const LOG_DIR_ENV: &str = "QALBU_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "QALBU_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "qalbu.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "qalbu-logs";

/// Paths and levels needed to boot the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CoreConfig {
    /// Resolves config from `QALBU_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}
