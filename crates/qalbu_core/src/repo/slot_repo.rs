//! Key-value slot repository contracts and implementations.
//!
//! # Responsibility
//! - Persist one opaque text blob per store key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - A write replaces the whole slot value in a single statement.
//! - Reading a missing slot is `Ok(None)`, never an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Slot persistence error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Slot key is empty after trimming.
    InvalidKey,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey => write!(f, "slot key must not be empty"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage substrate for the local stores: one text value per key.
pub trait SlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;
    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;
    fn delete_slot(&self, key: &str) -> RepoResult<()>;
}

impl<T: SlotRepository + ?Sized> SlotRepository for &T {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write_slot(key, value)
    }

    fn delete_slot(&self, key: &str) -> RepoResult<()> {
        (**self).delete_slot(key)
    }
}

/// SQLite-backed slot repository over the `kv_slots` table.
#[derive(Clone, Copy)]
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_slot(&self, key: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// In-memory slot repository.
///
/// Clones share one backing map, so several stores built from clones see the
/// same "profile", like stores sharing one SQLite file.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotRepository {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot value, for assertions on the persisted blob.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Overwrites a slot with arbitrary text, bypassing any store.
    pub fn put_raw(&self, key: &str, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), value.into());
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_slot(&self, key: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey);
    }
    Ok(trimmed)
}
