//! Content generator contract.
//!
//! # Responsibility
//! - Define the seam to the external generative service.
//! - Decode and validate raw generator output at that seam.
//!
//! # Invariants
//! - Content returned through this module has passed `HealingContent::validate`.

use crate::model::content::{ContentValidationError, HealingContent};
use crate::model::mood::MoodType;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing retry hint shown when generation fails.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Gagal mengambil cahaya petunjuk. Pastikan kunci API aktif.";

/// Generation failure surfaced to the caller as a retry prompt.
#[derive(Debug)]
pub enum GenerationError {
    /// Generator returned no text.
    EmptyResponse,
    /// Response text is not the expected JSON record.
    Decode(serde_json::Error),
    /// Record decoded but violates the fixed shape.
    InvalidContent(ContentValidationError),
    /// Transport or provider failure reported by the generator.
    Upstream(String),
}

impl GenerationError {
    /// Message safe to show to the user.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResponse => write!(f, "generator returned empty content"),
            Self::Decode(err) => write!(f, "generator returned malformed content: {err}"),
            Self::InvalidContent(err) => write!(f, "generator returned invalid content: {err}"),
            Self::Upstream(message) => write!(f, "generator failed: {message}"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::InvalidContent(err) => Some(err),
            Self::EmptyResponse | Self::Upstream(_) => None,
        }
    }
}

impl From<ContentValidationError> for GenerationError {
    fn from(value: ContentValidationError) -> Self {
        Self::InvalidContent(value)
    }
}

/// External service producing devotional content for a mood.
pub trait ContentGenerator {
    fn generate(&self, mood: MoodType) -> Result<HealingContent, GenerationError>;
}

impl<T: ContentGenerator + ?Sized> ContentGenerator for &T {
    fn generate(&self, mood: MoodType) -> Result<HealingContent, GenerationError> {
        (**self).generate(mood)
    }
}

/// Decodes generator response text into validated content.
pub fn parse_generated_content(raw: &str) -> Result<HealingContent, GenerationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let content: HealingContent =
        serde_json::from_str(trimmed).map_err(GenerationError::Decode)?;
    content.validate()?;
    Ok(content)
}
