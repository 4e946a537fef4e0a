//! Mood history store.
//!
//! # Invariants
//! - Entries are kept in append order; `list()` reverses it.
//! - `id` is unique within the store; `timestamp` never changes.
//! - Entries are never deleted one by one, only by `clear()`.

use crate::model::mood::MoodType;
use crate::model::mood_log::MoodLogEntry;
use crate::repo::slot_repo::SlotRepository;
use crate::store::{load_slot, persist_slot, Clock, StoreResult, MOOD_HISTORY_SLOT};
use log::{debug, info};
use std::collections::HashSet;

/// Append-only log of mood selections.
pub struct MoodLogStore<R: SlotRepository, C: Clock> {
    repo: R,
    clock: C,
    entries: Vec<MoodLogEntry>,
}

impl<R: SlotRepository, C: Clock> MoodLogStore<R, C> {
    /// Loads the log from its slot. A malformed blob loads as an empty log.
    pub fn load(repo: R, clock: C) -> StoreResult<Self> {
        let mut entries: Vec<MoodLogEntry> = load_slot(&repo, MOOD_HISTORY_SLOT)?;
        dedup_keep_first(&mut entries);
        debug!(
            "event=store_load module=mood_log status=ok entries={}",
            entries.len()
        );
        Ok(Self {
            repo,
            clock,
            entries,
        })
    }

    /// Records a mood selection and returns the created entry.
    ///
    /// The entry is persisted before this returns, so an immediate `list()`
    /// includes it.
    pub fn append(&mut self, mood: MoodType) -> StoreResult<MoodLogEntry> {
        let mut entry = MoodLogEntry::new(mood, self.clock.now_ms());
        while self.entries.iter().any(|existing| existing.id == entry.id) {
            entry = MoodLogEntry::new(mood, entry.timestamp);
        }

        let mut next = self.entries.clone();
        next.push(entry.clone());
        persist_slot(&self.repo, MOOD_HISTORY_SLOT, &next)?;
        self.entries = next;

        info!(
            "event=mood_log_append module=mood_log status=ok mood={} entries={}",
            mood,
            self.entries.len()
        );
        Ok(entry)
    }

    /// Sets or overwrites the note of entry `id`.
    ///
    /// Unknown ids are a silent no-op: nothing is written and no entry is
    /// created. Returns whether an entry was updated.
    pub fn attach_note(&mut self, id: &str, note: impl Into<String>) -> StoreResult<bool> {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            debug!("event=mood_log_note module=mood_log status=skipped reason=not_found");
            return Ok(false);
        };

        let mut next = self.entries.clone();
        next[index].note = Some(note.into());
        persist_slot(&self.repo, MOOD_HISTORY_SLOT, &next)?;
        self.entries = next;

        info!("event=mood_log_note module=mood_log status=ok");
        Ok(true)
    }

    /// Entries, most recent first.
    pub fn list(&self) -> Vec<MoodLogEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&MoodLogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the log by dropping its slot. Irreversible.
    pub fn clear(&mut self) -> StoreResult<()> {
        let removed = self.entries.len();
        self.repo.delete_slot(MOOD_HISTORY_SLOT)?;
        self.entries.clear();
        info!("event=mood_log_clear module=mood_log status=ok removed={removed}");
        Ok(())
    }
}

/// Keeps the first entry per id; later copies in a hand-edited blob are
/// dropped so notes always land on a single entry.
fn dedup_keep_first(entries: &mut Vec<MoodLogEntry>) {
    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.id.clone()));
}
