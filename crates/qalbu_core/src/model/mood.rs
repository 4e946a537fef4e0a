//! Mood catalog.
//!
//! # Invariants
//! - The set of moods is closed; persisted labels never change once shipped.
//! - `MoodType::ALL` keeps catalog display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Emotional state a user can select.
///
/// Serialized with its English label (`"Sad"`, `"Grateful"`, ...), which is
/// also the value handed to the content generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodType {
    Happy,
    Grateful,
    Optimistic,
    Confused,
    Anxious,
    Restless,
    Galau,
    Tired,
    Angry,
    Disappointed,
    Lonely,
    Sad,
}

impl MoodType {
    /// Every mood in catalog order.
    pub const ALL: [MoodType; 12] = [
        Self::Happy,
        Self::Grateful,
        Self::Optimistic,
        Self::Confused,
        Self::Anxious,
        Self::Restless,
        Self::Galau,
        Self::Tired,
        Self::Angry,
        Self::Disappointed,
        Self::Lonely,
        Self::Sad,
    ];

    /// Stable label used in persisted state and generator requests.
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Grateful => "Grateful",
            Self::Optimistic => "Optimistic",
            Self::Confused => "Confused",
            Self::Anxious => "Anxious",
            Self::Restless => "Restless",
            Self::Galau => "Galau",
            Self::Tired => "Tired",
            Self::Angry => "Angry",
            Self::Disappointed => "Disappointed",
            Self::Lonely => "Lonely",
            Self::Sad => "Sad",
        }
    }

    /// Short user-facing tagline shown on the mood picker.
    pub fn description(self) -> &'static str {
        match self {
            Self::Happy => "Bersukacita",
            Self::Grateful => "Berterima kasih",
            Self::Optimistic => "Penuh Harapan",
            Self::Confused => "Mencari Petunjuk",
            Self::Anxious => "Gelisah",
            Self::Restless => "Hati Tidak Tenang",
            Self::Galau => "Hati Bimbang",
            Self::Tired => "Lelah Lahir Batin",
            Self::Angry => "Emosi memuncak",
            Self::Disappointed => "Kecewa",
            Self::Lonely => "Sendiri",
            Self::Sad => "Berduka",
        }
    }

    /// Parses a mood label, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, UnknownMoodError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownMoodError(normalized.to_string()))
    }
}

impl Display for MoodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mood label outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMoodError(pub String);

impl Display for UnknownMoodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown mood `{}`", self.0)
    }
}

impl Error for UnknownMoodError {}
