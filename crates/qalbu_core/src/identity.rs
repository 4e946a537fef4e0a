//! Content identity derivation.
//!
//! # Responsibility
//! - Map generated content to stable keys so the same verse or hadith is
//!   recognized across independently generated responses.
//!
//! # Invariants
//! - Derivation is pure and total over validated content.
//! - Verse identity depends only on `(surah, ayah)`; translation and
//!   reflection text never affect it.
//! - Hadith identity depends only on the normalized text: trimmed, internal
//!   whitespace runs collapsed to one space, lowercased. Punctuation and
//!   diacritics are kept.

use crate::model::content::{HadithEntry, QuranVerse};
use uuid::Uuid;

const VERSE_ID_PREFIX: &str = "quran";
const HADITH_ID_PREFIX: &str = "hadith";
const VERSE_AUDIO_BASE_URL: &str = "https://everyayah.com/data/Alafasy_128kbps";

/// Returns the identity key of a verse, e.g. `quran-2-255`.
pub fn verse_id(surah_number: u16, ayah_number: u16) -> String {
    format!("{VERSE_ID_PREFIX}-{surah_number}-{ayah_number}")
}

/// Returns the identity key of a hadith text.
///
/// The text is normalized first (see module invariants) and then hashed into a
/// name-based UUID, so keys have a fixed length regardless of text size.
pub fn hadith_id(text: &str) -> String {
    let normalized = normalize_hadith_text(text);
    let name = format!("{HADITH_ID_PREFIX}:{normalized}");
    let digest = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
    format!("{HADITH_ID_PREFIX}-{digest}")
}

/// Normalizes hadith text for identity comparison.
pub fn normalize_hadith_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Recitation audio URL for a verse (Mishary Alafasy, 128 kbps).
pub fn verse_audio_url(surah_number: u16, ayah_number: u16) -> String {
    format!("{VERSE_AUDIO_BASE_URL}/{surah_number:03}{ayah_number:03}.mp3")
}

impl QuranVerse {
    pub fn identity(&self) -> String {
        verse_id(self.surah_number, self.ayah_number)
    }

    pub fn audio_url(&self) -> String {
        verse_audio_url(self.surah_number, self.ayah_number)
    }
}

impl HadithEntry {
    pub fn identity(&self) -> String {
        hadith_id(&self.text)
    }
}
