//! Local profile stores.
//!
//! # Responsibility
//! - Own the mood history, favorites and checklist state.
//! - Persist every mutation synchronously through a `SlotRepository`.
//!
//! # Invariants
//! - Each store owns exactly one slot key; no two stores share a key.
//! - Each store keeps a write-through cache: the cache only changes after
//!   the slot write succeeded.
//! - A slot blob that fails to parse loads as an empty store.

use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod checklist;
pub mod favorites;
pub mod mood_log;

pub const MOOD_HISTORY_SLOT: &str = "qalbu_mood_history";
pub const FAVORITES_SLOT: &str = "qalbu_favorites";
pub const CHECKLIST_SLOT: &str = "qalbu_checklist";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure. Missing ids are never errors.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode store state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Time source for store timestamps (epoch milliseconds).
pub trait Clock {
    fn now_ms(&self) -> i64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
            })
    }
}

/// Manually driven clock for tests and replays.
///
/// Clones carry their own time; share one clock by reference to drive
/// several stores together.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

/// Reads and decodes one slot, falling back to the empty value when the blob
/// is missing or unreadable.
fn load_slot<R, T>(repo: &R, key: &str) -> StoreResult<T>
where
    R: SlotRepository,
    T: DeserializeOwned + Default,
{
    let Some(raw) = repo.read_slot(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(
                "event=store_load module=store status=recovered slot={key} bytes={} error_code=malformed_slot error={}",
                raw.len(),
                err
            );
            Ok(T::default())
        }
    }
}

/// Encodes and writes one slot.
fn persist_slot<R, T>(repo: &R, key: &str, value: &T) -> StoreResult<()>
where
    R: SlotRepository,
    T: Serialize + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    repo.write_slot(key, &encoded)?;
    Ok(())
}
