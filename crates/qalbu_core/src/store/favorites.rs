//! Favorites store.
//!
//! # Invariants
//! - At most one item per derived `id`.
//! - Slot order is save order; a re-save moves the item to the end.
//! - `list()` is timestamp-descending, most recently saved first on ties.

use crate::model::favorite::FavoriteItem;
use crate::repo::slot_repo::SlotRepository;
use crate::store::{load_slot, persist_slot, StoreResult, FAVORITES_SLOT};
use log::{debug, info};

/// Saved verses and hadith keyed by content identity.
pub struct FavoritesStore<R: SlotRepository> {
    repo: R,
    items: Vec<FavoriteItem>,
}

impl<R: SlotRepository> FavoritesStore<R> {
    /// Loads favorites from their slot. A malformed blob loads as empty.
    pub fn load(repo: R) -> StoreResult<Self> {
        let mut items: Vec<FavoriteItem> = load_slot(&repo, FAVORITES_SLOT)?;
        dedup_keep_last(&mut items);
        debug!(
            "event=store_load module=favorites status=ok items={}",
            items.len()
        );
        Ok(Self { repo, items })
    }

    /// Inserts `item`, replacing any existing item with the same id.
    pub fn save(&mut self, item: FavoriteItem) -> StoreResult<()> {
        let mut next: Vec<FavoriteItem> = self
            .items
            .iter()
            .filter(|existing| existing.id() != item.id())
            .cloned()
            .collect();
        let replaced = next.len() != self.items.len();
        let kind = item.kind();
        next.push(item);
        persist_slot(&self.repo, FAVORITES_SLOT, &next)?;
        self.items = next;

        info!(
            "event=favorite_save module=favorites status=ok kind={} replaced={} items={}",
            kind.as_str(),
            replaced,
            self.items.len()
        );
        Ok(())
    }

    /// Removes the item with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        if !self.is_saved(id) {
            debug!("event=favorite_remove module=favorites status=skipped reason=not_found");
            return Ok(());
        }

        let next: Vec<FavoriteItem> = self
            .items
            .iter()
            .filter(|existing| existing.id() != id)
            .cloned()
            .collect();
        persist_slot(&self.repo, FAVORITES_SLOT, &next)?;
        self.items = next;

        info!(
            "event=favorite_remove module=favorites status=ok items={}",
            self.items.len()
        );
        Ok(())
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items by save time, newest first.
    pub fn list(&self) -> Vec<FavoriteItem> {
        let mut listed: Vec<FavoriteItem> = self.items.iter().rev().cloned().collect();
        // Stable sort keeps reverse save order among equal timestamps.
        listed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        listed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Drops earlier duplicates so a hand-edited or legacy blob still honours the
/// one-item-per-id invariant.
fn dedup_keep_last(items: &mut Vec<FavoriteItem>) {
    let mut kept: Vec<FavoriteItem> = Vec::with_capacity(items.len());
    for item in items.drain(..).rev() {
        if !kept.iter().any(|existing| existing.id() == item.id()) {
            kept.push(item);
        }
    }
    kept.reverse();
    *items = kept;
}
