//! Saved verse/hadith record.
//!
//! # Invariants
//! - `id` is the derived content identity, never a random token. It is
//!   computed at construction and checked again on read.
//! - The persisted `type` discriminator always agrees with the payload.

use crate::model::content::{HadithEntry, QuranVerse};
use crate::model::mood::MoodType;
use serde::{Deserialize, Serialize};

/// Favorite payload discriminator, serialized as `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteKind {
    Quran,
    Hadith,
}

impl FavoriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quran => "quran",
            Self::Hadith => "hadith",
        }
    }
}

/// Payload copied from generated content at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FavoriteContent {
    Quran(QuranVerse),
    Hadith(HadithEntry),
}

impl FavoriteContent {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Quran(_) => FavoriteKind::Quran,
            Self::Hadith(_) => FavoriteKind::Hadith,
        }
    }

    /// Derived identity of the payload.
    pub fn identity(&self) -> String {
        match self {
            Self::Quran(verse) => verse.identity(),
            Self::Hadith(hadith) => hadith.identity(),
        }
    }
}

/// Saved content item keyed by derived identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FavoriteRecord", into = "FavoriteRecord")]
pub struct FavoriteItem {
    id: String,
    content: FavoriteContent,
    /// Unix epoch milliseconds when saved.
    pub timestamp: i64,
    /// Mood active when the item was saved. Provenance only.
    pub mood_context: MoodType,
}

impl FavoriteItem {
    /// Builds a favorite for a verse, keyed by its surah/ayah identity.
    pub fn verse(verse: QuranVerse, mood_context: MoodType, timestamp: i64) -> Self {
        Self::from_content(FavoriteContent::Quran(verse), mood_context, timestamp)
    }

    /// Builds a favorite for a hadith, keyed by its normalized-text identity.
    pub fn hadith(hadith: HadithEntry, mood_context: MoodType, timestamp: i64) -> Self {
        Self::from_content(FavoriteContent::Hadith(hadith), mood_context, timestamp)
    }

    fn from_content(content: FavoriteContent, mood_context: MoodType, timestamp: i64) -> Self {
        Self {
            id: content.identity(),
            content,
            timestamp,
            mood_context,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &FavoriteContent {
        &self.content
    }

    pub fn kind(&self) -> FavoriteKind {
        self.content.kind()
    }
}

/// Persisted shape: `{id, type, content, timestamp, moodContext}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteRecord {
    id: String,
    #[serde(rename = "type")]
    kind: FavoriteKind,
    content: FavoriteContent,
    timestamp: i64,
    mood_context: MoodType,
}

impl TryFrom<FavoriteRecord> for FavoriteItem {
    type Error = String;

    fn try_from(record: FavoriteRecord) -> Result<Self, Self::Error> {
        if record.kind != record.content.kind() {
            return Err(format!(
                "favorite `{}` declares type `{}` but holds a {} payload",
                record.id,
                record.kind.as_str(),
                record.content.kind().as_str()
            ));
        }
        let derived = record.content.identity();
        if record.id != derived {
            return Err(format!(
                "favorite `{}` does not match its content identity `{derived}`",
                record.id
            ));
        }
        Ok(Self {
            id: record.id,
            content: record.content,
            timestamp: record.timestamp,
            mood_context: record.mood_context,
        })
    }
}

impl From<FavoriteItem> for FavoriteRecord {
    fn from(item: FavoriteItem) -> Self {
        Self {
            kind: item.content.kind(),
            id: item.id,
            content: item.content,
            timestamp: item.timestamp,
            mood_context: item.mood_context,
        }
    }
}
