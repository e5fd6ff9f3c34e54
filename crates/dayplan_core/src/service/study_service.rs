//! Study topic manager.
//!
//! # Responsibility
//! - Append and delete study session entries on one day record.
//! - Derive session count and lenient minute totals.
//!
//! # Invariants
//! - A topic that trims to empty is declined; the collection is untouched.
//! - Insertion order is display order; the list is never re-sorted.

use crate::model::date_key::DateKey;
use crate::model::day_record::{DayRecord, Difficulty, EntryId, Minutes, StudyTopic};
use crate::service::trimmed_or_unset;
use uuid::Uuid;

const DEFAULT_RESOURCE: &str = "Other";

/// Caller-provided study topic fields, as entered in a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyTopicDraft {
    pub topic: String,
    /// Raw duration input; parsed leniently, kept verbatim when non-numeric.
    pub duration: String,
    pub difficulty: Option<Difficulty>,
    pub resource: String,
    pub notes: String,
}

/// Aggregate view over one day's study sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudySummary {
    pub total_sessions: usize,
    /// Sum of numeric durations; non-numeric entries contribute zero.
    pub total_minutes: u32,
}

/// Appends a study topic recorded under `date`.
///
/// # Contract
/// - Declines silently (returns `None`) when `topic` trims to empty.
/// - `difficulty` falls back to Intermediate, `resource` to "Other".
pub fn add_study_topic(
    record: &mut DayRecord,
    draft: &StudyTopicDraft,
    date: DateKey,
) -> Option<StudyTopic> {
    let topic = draft.topic.trim();
    if topic.is_empty() {
        return None;
    }

    let resource = draft.resource.trim();
    let entry = StudyTopic {
        id: Uuid::new_v4(),
        topic: topic.to_string(),
        duration: Minutes::parse(&draft.duration),
        difficulty: draft.difficulty.unwrap_or_default(),
        resource: if resource.is_empty() {
            DEFAULT_RESOURCE.to_string()
        } else {
            resource.to_string()
        },
        notes: trimmed_or_unset(&draft.notes),
        date,
    };

    record.study_topics.push(entry.clone());
    Some(entry)
}

/// Removes the topic with `id`. Returns whether anything was removed.
pub fn delete_study_topic(record: &mut DayRecord, id: EntryId) -> bool {
    let before = record.study_topics.len();
    record.study_topics.retain(|topic| topic.id != id);
    record.study_topics.len() != before
}

/// Session count and lenient minute total for the day.
pub fn study_summary(record: &DayRecord) -> StudySummary {
    StudySummary {
        total_sessions: record.study_topics.len(),
        total_minutes: record
            .study_topics
            .iter()
            .filter_map(|topic| topic.duration.as_ref())
            .map(Minutes::as_minutes)
            .sum(),
    }
}
