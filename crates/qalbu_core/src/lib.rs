//! Core logic for Qalbu: local mood history, favorites and daily-practice
//! checklist, plus the identity rules that recognize repeated content.
//! This crate is the single source of truth for those invariants.

pub mod config;
pub mod db;
pub mod gate;
pub mod generator;
pub mod identity;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use gate::{AccessGate, ApprovalStatus, StaticAccessGate};
pub use generator::{parse_generated_content, ContentGenerator, GenerationError};
pub use identity::{hadith_id, normalize_hadith_text, verse_audio_url, verse_id};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::content::{ContentValidationError, HadithEntry, HealingContent, QuranVerse};
pub use model::favorite::{FavoriteContent, FavoriteItem, FavoriteKind};
pub use model::mood::{MoodType, UnknownMoodError};
pub use model::mood_log::{journal_note, MoodLogEntry};
pub use model::practice::{find_practice, DailyPractice, DAILY_PRACTICES};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
};
pub use service::devotion_service::{DevotionError, DevotionService, SelectedMood};
pub use service::stats::{all_time_stats, monthly_stats, AllTimeStats, MonthlyStats};
pub use store::checklist::{ChecklistProgress, ChecklistStore};
pub use store::favorites::FavoritesStore;
pub use store::mood_log::MoodLogStore;
pub use store::{Clock, ManualClock, StoreError, StoreResult, SystemClock};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
