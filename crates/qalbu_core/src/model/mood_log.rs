//! Mood history record.

use crate::model::mood::MoodType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One mood selection, optionally annotated with a journal note.
///
/// `id` and `timestamp` are fixed at creation; only `note` changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub id: String,
    pub mood: MoodType,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodLogEntry {
    /// Creates an entry with a fresh random id and no note.
    pub fn new(mood: MoodType, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mood,
            timestamp,
            note: None,
        }
    }
}

/// Journal text as it should be stored: trimmed, `None` when blank.
pub fn journal_note(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
