//! Daily-practice checklist store.
//!
//! Ids are not validated against the practice catalog; unknown ids are
//! stored like any other.

use crate::model::practice::DailyPractice;
use crate::repo::slot_repo::SlotRepository;
use crate::store::{load_slot, persist_slot, StoreResult, CHECKLIST_SLOT};
use log::{debug, info};
use std::collections::BTreeSet;

/// Completed practices over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub done: usize,
    pub total: usize,
}

/// Set of checked practice ids, persisted in the order they were checked.
pub struct ChecklistStore<R: SlotRepository> {
    repo: R,
    checked: Vec<String>,
}

impl<R: SlotRepository> ChecklistStore<R> {
    /// Loads the checklist from its slot. A malformed blob loads as empty.
    pub fn load(repo: R) -> StoreResult<Self> {
        let raw: Vec<String> = load_slot(&repo, CHECKLIST_SLOT)?;
        let mut checked: Vec<String> = Vec::with_capacity(raw.len());
        for id in raw {
            if !checked.contains(&id) {
                checked.push(id);
            }
        }
        debug!(
            "event=store_load module=checklist status=ok checked={}",
            checked.len()
        );
        Ok(Self { repo, checked })
    }

    /// Flips membership of `id` and returns the new state.
    pub fn toggle(&mut self, id: &str) -> StoreResult<bool> {
        let now_checked = !self.is_checked(id);
        let next: Vec<String> = if now_checked {
            let mut next = self.checked.clone();
            next.push(id.to_string());
            next
        } else {
            self.checked
                .iter()
                .filter(|existing| existing.as_str() != id)
                .cloned()
                .collect()
        };
        persist_slot(&self.repo, CHECKLIST_SLOT, &next)?;
        self.checked = next;

        info!(
            "event=checklist_toggle module=checklist status=ok checked={} total_checked={}",
            now_checked,
            self.checked.len()
        );
        Ok(now_checked)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.iter().any(|existing| existing == id)
    }

    pub fn list_checked(&self) -> BTreeSet<String> {
        self.checked.iter().cloned().collect()
    }

    /// Counts checked ids that belong to `catalog`.
    pub fn progress(&self, catalog: &[DailyPractice]) -> ChecklistProgress {
        ChecklistProgress {
            done: catalog
                .iter()
                .filter(|practice| self.is_checked(practice.id))
                .count(),
            total: catalog.len(),
        }
    }
}
