//! Per-day planner records.
//!
//! # Responsibility
//! - Define the three entry collections stored under one `DateKey`.
//! - Keep the task list ordered by start time after mutations.
//!
//! # Invariants
//! - `tasks` is always sorted ascending by `start_time`; entries with equal
//!   times keep their insertion order.
//! - Stored durations are preserved verbatim, numeric or not.
//! - A missing collection in a stored payload loads as empty.

use crate::model::date_key::DateKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for every planner entry.
pub type EntryId = Uuid;

/// Permissive duration value for study and practice entries.
///
/// Loads whatever earlier sessions stored: a minute count, or free text that
/// never parsed as one. Free text counts as zero in summaries but is never
/// rewritten on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Minutes {
    Count(u32),
    Raw(String),
}

impl Minutes {
    /// Parses lenient form input. Blank input means "no duration".
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<u32>() {
            Ok(count) => Some(Self::Count(count)),
            Err(_) => Some(Self::Raw(input.to_string())),
        }
    }

    /// Minute contribution to summaries; non-numeric text counts as zero.
    pub fn as_minutes(&self) -> u32 {
        match self {
            Self::Count(count) => *count,
            Self::Raw(text) => text.trim().parse().unwrap_or(0),
        }
    }
}

/// Study difficulty scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// Timed task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    /// Zero-padded 24h `HH:MM`; list ordering compares these as text.
    pub start_time: String,
    /// Not validated against `start_time`; an inverted range is stored as-is.
    pub end_time: String,
    pub name: String,
    /// Free-form tag such as "Study" or "Travel".
    pub category: String,
    pub completed: bool,
}

/// Study session entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTopic {
    pub id: EntryId,
    pub topic: String,
    pub duration: Option<Minutes>,
    pub difficulty: Difficulty,
    pub resource: String,
    pub notes: Option<String>,
    /// The day this topic was recorded under.
    pub date: DateKey,
}

/// Practice activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeActivity {
    pub id: EntryId,
    /// Serialized as `type` to match the stored payload naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: Option<Minutes>,
    pub completed: bool,
    pub content: Option<String>,
    pub notes: Option<String>,
    pub date: DateKey,
}

/// Everything recorded under one `DateKey`.
///
/// Created lazily as the empty default on first access; only item-level
/// deletes and the global wipe ever shrink it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub study_topics: Vec<StudyTopic>,
    #[serde(default)]
    pub practice_activities: Vec<PracticeActivity>,
}

impl DayRecord {
    /// Restores the task ordering invariant after an insert or update.
    ///
    /// The sort is stable, so tasks sharing a start time keep the order in
    /// which they were added.
    pub fn sort_tasks(&mut self) {
        self.tasks.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }

    /// True when nothing has been recorded for the day yet.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.study_topics.is_empty() && self.practice_activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Minutes;

    #[test]
    fn parse_blank_input_is_unset() {
        assert_eq!(Minutes::parse(""), None);
        assert_eq!(Minutes::parse("   "), None);
    }

    #[test]
    fn parse_keeps_non_numeric_text_verbatim() {
        assert_eq!(Minutes::parse("45"), Some(Minutes::Count(45)));
        assert_eq!(
            Minutes::parse("about an hour"),
            Some(Minutes::Raw("about an hour".to_string()))
        );
    }

    #[test]
    fn non_numeric_text_counts_as_zero() {
        assert_eq!(Minutes::Count(30).as_minutes(), 30);
        assert_eq!(Minutes::Raw("abc".to_string()).as_minutes(), 0);
        assert_eq!(Minutes::Raw(" 20 ".to_string()).as_minutes(), 20);
    }
}
