//! Practice activity manager.
//!
//! # Responsibility
//! - Append and delete practice entries on one day record.
//! - Derive activity counts and lenient minute totals.
//!
//! # Invariants
//! - Every submission is stored; there is no blank guard here, unlike study
//!   topics.
//! - The completion flag is true only for the literal input `"true"`.

use crate::model::date_key::DateKey;
use crate::model::day_record::{DayRecord, EntryId, Minutes, PracticeActivity};
use crate::service::trimmed_or_unset;
use uuid::Uuid;

/// Caller-provided practice fields, as entered in a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeDraft {
    /// Activity kind, e.g. "Podcast", "Speaking", "Writing", "Reading".
    pub kind: String,
    /// Raw duration input; parsed leniently, kept verbatim when non-numeric.
    pub duration: String,
    /// Form value; only the literal `"true"` marks the activity completed.
    pub completed: String,
    pub content: String,
    pub notes: String,
}

/// Aggregate view over one day's practice activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSummary {
    pub total_activities: usize,
    pub completed_activities: usize,
    /// Sum of numeric durations; non-numeric entries contribute zero.
    pub total_minutes: u32,
}

/// Appends a practice activity recorded under `date`.
pub fn add_practice_activity(
    record: &mut DayRecord,
    draft: &PracticeDraft,
    date: DateKey,
) -> PracticeActivity {
    let entry = PracticeActivity {
        id: Uuid::new_v4(),
        kind: draft.kind.clone(),
        duration: Minutes::parse(&draft.duration),
        // Literal comparison, not truthiness: any other value is "not done".
        completed: draft.completed == "true",
        content: trimmed_or_unset(&draft.content),
        notes: trimmed_or_unset(&draft.notes),
        date,
    };

    record.practice_activities.push(entry.clone());
    entry
}

/// Removes the activity with `id`. Returns whether anything was removed.
pub fn delete_practice_activity(record: &mut DayRecord, id: EntryId) -> bool {
    let before = record.practice_activities.len();
    record.practice_activities.retain(|activity| activity.id != id);
    record.practice_activities.len() != before
}

/// Activity counts and lenient minute total for the day.
pub fn practice_summary(record: &DayRecord) -> PracticeSummary {
    PracticeSummary {
        total_activities: record.practice_activities.len(),
        completed_activities: record
            .practice_activities
            .iter()
            .filter(|activity| activity.completed)
            .count(),
        total_minutes: record
            .practice_activities
            .iter()
            .filter_map(|activity| activity.duration.as_ref())
            .map(Minutes::as_minutes)
            .sum(),
    }
}
