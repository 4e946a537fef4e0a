//! Domain model for mood history, favorites and generated content.
//!
//! # Responsibility
//! - Define the records persisted by the local stores.
//! - Hold the fixed mood and daily-practice catalogs.
//!
//! # Invariants
//! - Persisted field names stay camelCase to keep stored blobs readable by
//!   older app builds.

pub mod content;
pub mod favorite;
pub mod mood;
pub mod mood_log;
pub mod practice;
