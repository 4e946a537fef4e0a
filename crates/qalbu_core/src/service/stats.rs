//! Mood history statistics.
//!
//! # Invariants
//! - Input is a most-recent-first history as returned by `MoodLogStore::list`.
//! - Dominant mood ties go to the mood whose first occurrence in that list
//!   comes first, i.e. the most recently felt one.

use crate::model::mood::MoodType;
use crate::model::mood_log::MoodLogEntry;
use std::collections::BTreeMap;

/// Length of the rolling "this month" window.
pub const MONTHLY_WINDOW_MS: i64 = 30 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllTimeStats {
    pub total: usize,
    pub dominant: MoodType,
    pub counts: BTreeMap<MoodType, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStats {
    /// Every catalog mood, zero when absent from the window.
    pub counts: BTreeMap<MoodType, usize>,
    /// Highest per-mood count in the window.
    pub max: usize,
    pub total: usize,
}

/// Totals over the whole history. `None` when the history is empty.
pub fn all_time_stats(history: &[MoodLogEntry]) -> Option<AllTimeStats> {
    let first = history.first()?;

    let mut ordered: Vec<(MoodType, usize)> = Vec::new();
    for entry in history {
        match ordered.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => ordered.push((entry.mood, 1)),
        }
    }

    let mut dominant = first.mood;
    let mut max_count = 0;
    for (mood, count) in &ordered {
        if *count > max_count {
            max_count = *count;
            dominant = *mood;
        }
    }

    Some(AllTimeStats {
        total: history.len(),
        dominant,
        counts: ordered.into_iter().collect(),
    })
}

/// Per-mood counts over the 30 days ending at `now_ms`.
pub fn monthly_stats(history: &[MoodLogEntry], now_ms: i64) -> MonthlyStats {
    let window_start = now_ms.saturating_sub(MONTHLY_WINDOW_MS);
    let mut counts: BTreeMap<MoodType, usize> =
        MoodType::ALL.into_iter().map(|mood| (mood, 0)).collect();
    let mut max = 0;
    let mut total = 0;

    for entry in history.iter().filter(|entry| entry.timestamp >= window_start) {
        let count = counts.entry(entry.mood).or_insert(0);
        *count += 1;
        max = max.max(*count);
        total += 1;
    }

    MonthlyStats { counts, max, total }
}

#[cfg(test)]
mod tests {
    use super::{all_time_stats, monthly_stats, MONTHLY_WINDOW_MS};
    use crate::model::mood::MoodType;
    use crate::model::mood_log::MoodLogEntry;

    fn entry(mood: MoodType, timestamp: i64) -> MoodLogEntry {
        MoodLogEntry::new(mood, timestamp)
    }

    #[test]
    fn empty_history_has_no_all_time_stats() {
        assert!(all_time_stats(&[]).is_none());
    }

    #[test]
    fn dominant_is_most_frequent() {
        let history = vec![
            entry(MoodType::Sad, 3),
            entry(MoodType::Happy, 2),
            entry(MoodType::Happy, 1),
        ];
        let stats = all_time_stats(&history).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.dominant, MoodType::Happy);
        assert_eq!(stats.counts[&MoodType::Happy], 2);
        assert_eq!(stats.counts[&MoodType::Sad], 1);
    }

    #[test]
    fn dominant_tie_goes_to_most_recent_mood() {
        let history = vec![
            entry(MoodType::Anxious, 4),
            entry(MoodType::Tired, 3),
            entry(MoodType::Tired, 2),
            entry(MoodType::Anxious, 1),
        ];
        assert_eq!(all_time_stats(&history).unwrap().dominant, MoodType::Anxious);
    }

    #[test]
    fn monthly_window_excludes_older_entries_and_zero_fills() {
        let now = 100 * MONTHLY_WINDOW_MS;
        let history = vec![
            entry(MoodType::Grateful, now),
            entry(MoodType::Grateful, now - MONTHLY_WINDOW_MS),
            entry(MoodType::Angry, now - MONTHLY_WINDOW_MS - 1),
        ];
        let stats = monthly_stats(&history, now);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.max, 2);
        assert_eq!(stats.counts[&MoodType::Grateful], 2);
        assert_eq!(stats.counts[&MoodType::Angry], 0);
        assert_eq!(stats.counts.len(), MoodType::ALL.len());
    }
}
