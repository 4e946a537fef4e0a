//! Devotion session use-cases.
//!
//! # Responsibility
//! - Run the mood flow: approval gate, history log, content generation.
//! - Turn favorite/journal/checklist gestures into store mutations.
//!
//! # Invariants
//! - Nothing is logged or generated unless the gate reports `Approved`.
//! - A mood selection is logged before generation and stays logged when
//!   generation fails.
//! - Favorites are always keyed by derived content identity.

use crate::gate::{AccessGate, ApprovalStatus};
use crate::generator::{ContentGenerator, GenerationError};
use crate::model::content::HealingContent;
use crate::model::favorite::FavoriteItem;
use crate::model::mood::MoodType;
use crate::model::mood_log::{journal_note, MoodLogEntry};
use crate::repo::slot_repo::SlotRepository;
use crate::service::stats::{all_time_stats, monthly_stats, AllTimeStats, MonthlyStats};
use crate::store::checklist::ChecklistStore;
use crate::store::favorites::FavoritesStore;
use crate::store::mood_log::MoodLogStore;
use crate::store::{Clock, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for devotion use-cases.
#[derive(Debug)]
pub enum DevotionError {
    /// Current user is not approved yet.
    AccessDenied(ApprovalStatus),
    Store(StoreError),
    Generation(GenerationError),
}

impl Display for DevotionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied(status) => write!(f, "access denied: account is {status}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Generation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DevotionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AccessDenied(_) => None,
            Self::Store(err) => Some(err),
            Self::Generation(err) => Some(err),
        }
    }
}

impl From<StoreError> for DevotionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<GenerationError> for DevotionError {
    fn from(value: GenerationError) -> Self {
        Self::Generation(value)
    }
}

/// Outcome of a mood selection.
///
/// `entry` is always persisted; `content` carries the generation result so a
/// failure can be shown as a retry prompt while the log id stays usable for
/// journaling.
#[derive(Debug)]
pub struct SelectedMood {
    pub entry: MoodLogEntry,
    pub content: Result<HealingContent, GenerationError>,
}

/// Facade wiring the gate, the generator and the three local stores.
pub struct DevotionService<G, A, R, C>
where
    G: ContentGenerator,
    A: AccessGate,
    R: SlotRepository,
    C: Clock,
{
    generator: G,
    gate: A,
    clock: C,
    mood_log: MoodLogStore<R, C>,
    favorites: FavoritesStore<R>,
    checklist: ChecklistStore<R>,
}

impl<G, A, R, C> DevotionService<G, A, R, C>
where
    G: ContentGenerator,
    A: AccessGate,
    R: SlotRepository + Clone,
    C: Clock + Clone,
{
    /// Loads all stores from `repo`.
    pub fn open(generator: G, gate: A, repo: R, clock: C) -> Result<Self, StoreError> {
        Ok(Self {
            mood_log: MoodLogStore::load(repo.clone(), clock.clone())?,
            favorites: FavoritesStore::load(repo.clone())?,
            checklist: ChecklistStore::load(repo)?,
            generator,
            gate,
            clock,
        })
    }
}

impl<G, A, R, C> DevotionService<G, A, R, C>
where
    G: ContentGenerator,
    A: AccessGate,
    R: SlotRepository,
    C: Clock,
{
    /// Logs `mood` and asks the generator for matching content.
    pub fn select_mood(&mut self, mood: MoodType) -> Result<SelectedMood, DevotionError> {
        self.ensure_approved()?;
        let entry = self.mood_log.append(mood)?;
        let content = self.generator.generate(mood);
        match &content {
            Ok(_) => info!("event=mood_select module=devotion status=ok mood={mood}"),
            Err(err) => warn!(
                "event=mood_select module=devotion status=error mood={mood} error_code=generation_failed error={err}"
            ),
        }
        Ok(SelectedMood { entry, content })
    }

    /// Regenerates content for `mood` without logging a new selection.
    pub fn refresh(&self, mood: MoodType) -> Result<HealingContent, DevotionError> {
        self.ensure_approved()?;
        let content = self.generator.generate(mood)?;
        info!("event=mood_refresh module=devotion status=ok mood={mood}");
        Ok(content)
    }

    /// Attaches a journal note to a logged selection.
    ///
    /// Blank text is ignored. Returns whether a note was stored.
    pub fn save_journal(&mut self, log_id: &str, text: &str) -> Result<bool, DevotionError> {
        let Some(note) = journal_note(text) else {
            return Ok(false);
        };
        Ok(self.mood_log.attach_note(log_id, note)?)
    }

    /// Saves the verse of `content` or removes it when already saved.
    ///
    /// Returns the saved state after the toggle.
    pub fn toggle_verse_favorite(
        &mut self,
        content: &HealingContent,
        mood: MoodType,
    ) -> Result<bool, DevotionError> {
        let item = FavoriteItem::verse(content.quran.clone(), mood, self.clock.now_ms());
        self.toggle_favorite(item)
    }

    /// Saves the hadith of `content` or removes it when already saved.
    pub fn toggle_hadith_favorite(
        &mut self,
        content: &HealingContent,
        mood: MoodType,
    ) -> Result<bool, DevotionError> {
        let item = FavoriteItem::hadith(content.hadith.clone(), mood, self.clock.now_ms());
        self.toggle_favorite(item)
    }

    pub fn is_verse_saved(&self, content: &HealingContent) -> bool {
        self.favorites.is_saved(&content.quran.identity())
    }

    pub fn is_hadith_saved(&self, content: &HealingContent) -> bool {
        self.favorites.is_saved(&content.hadith.identity())
    }

    pub fn toggle_practice(&mut self, id: &str) -> Result<bool, DevotionError> {
        Ok(self.checklist.toggle(id)?)
    }

    pub fn all_time_stats(&self) -> Option<AllTimeStats> {
        all_time_stats(&self.mood_log.list())
    }

    pub fn monthly_stats(&self) -> MonthlyStats {
        monthly_stats(&self.mood_log.list(), self.clock.now_ms())
    }

    pub fn mood_log(&self) -> &MoodLogStore<R, C> {
        &self.mood_log
    }

    pub fn favorites(&self) -> &FavoritesStore<R> {
        &self.favorites
    }

    pub fn checklist(&self) -> &ChecklistStore<R> {
        &self.checklist
    }

    fn toggle_favorite(&mut self, item: FavoriteItem) -> Result<bool, DevotionError> {
        if self.favorites.is_saved(item.id()) {
            self.favorites.remove(item.id())?;
            Ok(false)
        } else {
            self.favorites.save(item)?;
            Ok(true)
        }
    }

    fn ensure_approved(&self) -> Result<(), DevotionError> {
        let status = self.gate.approval_status();
        if !status.is_approved() {
            warn!("event=access_check module=devotion status=denied approval={status}");
            return Err(DevotionError::AccessDenied(status));
        }
        Ok(())
    }
}
