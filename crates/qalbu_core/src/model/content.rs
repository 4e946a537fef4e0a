//! Generated devotional content schema.
//!
//! # Responsibility
//! - Mirror the record shape returned by the content generator.
//! - Validate the shape once at the generator boundary.
//!
//! # Invariants
//! - Records are treated as immutable after validation.
//! - Identity derivation only ever sees validated records.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const SURAH_COUNT: u16 = 114;
/// Longest surah (Al-Baqarah) has 286 ayat.
pub const MAX_AYAH_NUMBER: u16 = 286;
pub const PRACTICAL_STEP_COUNT: usize = 3;
pub const REFLECTION_QUESTION_COUNT: usize = 2;

/// Qur'an verse section of a generated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranVerse {
    pub surah_name: String,
    pub surah_number: u16,
    pub ayah_number: u16,
    pub arabic_text: String,
    pub translation: String,
    pub reflection: String,
}

/// Hadith section of a generated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithEntry {
    /// Narration source, e.g. `HR. Bukhari`.
    pub source: String,
    pub text: String,
    pub reflection: String,
}

/// Full generated response for one mood selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealingContent {
    /// Mood name as phrased by the generator; free text, not a `MoodType`.
    pub mood: String,
    pub summary: String,
    pub quran: QuranVerse,
    pub hadith: HadithEntry,
    pub wisdom: String,
    pub practical_steps: Vec<String>,
    pub reflection_questions: Vec<String>,
}

/// Shape violations detected in generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    SurahOutOfRange(u16),
    AyahOutOfRange(u16),
    EmptyHadithText,
    PracticalStepCount(usize),
    ReflectionQuestionCount(usize),
}

impl Display for ContentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SurahOutOfRange(value) => {
                write!(f, "surahNumber {value} is outside 1..={SURAH_COUNT}")
            }
            Self::AyahOutOfRange(value) => {
                write!(f, "ayahNumber {value} is outside 1..={MAX_AYAH_NUMBER}")
            }
            Self::EmptyHadithText => write!(f, "hadith text must not be empty"),
            Self::PracticalStepCount(count) => write!(
                f,
                "expected {PRACTICAL_STEP_COUNT} practical steps, got {count}"
            ),
            Self::ReflectionQuestionCount(count) => write!(
                f,
                "expected {REFLECTION_QUESTION_COUNT} reflection questions, got {count}"
            ),
        }
    }
}

impl Error for ContentValidationError {}

impl HealingContent {
    /// Checks the fixed shape promised by the generator contract.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        let verse = &self.quran;
        if verse.surah_number == 0 || verse.surah_number > SURAH_COUNT {
            return Err(ContentValidationError::SurahOutOfRange(verse.surah_number));
        }
        if verse.ayah_number == 0 || verse.ayah_number > MAX_AYAH_NUMBER {
            return Err(ContentValidationError::AyahOutOfRange(verse.ayah_number));
        }
        if self.hadith.text.trim().is_empty() {
            return Err(ContentValidationError::EmptyHadithText);
        }
        if self.practical_steps.len() != PRACTICAL_STEP_COUNT {
            return Err(ContentValidationError::PracticalStepCount(
                self.practical_steps.len(),
            ));
        }
        if self.reflection_questions.len() != REFLECTION_QUESTION_COUNT {
            return Err(ContentValidationError::ReflectionQuestionCount(
                self.reflection_questions.len(),
            ));
        }
        Ok(())
    }
}
