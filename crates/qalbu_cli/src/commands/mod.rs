pub mod checklist;
pub mod favorite;
pub mod mood;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use qalbu_core::db::open_db;
use qalbu_core::CoreConfig;
use rusqlite::Connection;

/// Opens the profile database named by `config`.
fn open_profile(config: &CoreConfig) -> Result<Connection> {
    open_db(&config.db_path)
        .with_context(|| format!("failed to open profile at {}", config.db_path.display()))
}

/// Local wall-clock rendering of an epoch-millisecond timestamp.
fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || format!("{timestamp_ms}ms"),
        |utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}
