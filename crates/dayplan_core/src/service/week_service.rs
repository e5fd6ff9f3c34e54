//! Weekly completion overview.
//!
//! # Responsibility
//! - Fan read-only loads out over one Monday-start week.
//! - Reduce each day to its task completion rate.
//!
//! # Invariants
//! - Exactly seven entries, week start through week start + 6.
//! - Never mutates stored records or any session's active record.

use crate::model::date_key::DateKey;
use crate::repo::record_store::{RecordStore, RepoResult};
use crate::service::task_service;

/// One day's slot in the weekly overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCompletion {
    pub date: DateKey,
    /// English weekday name, Monday first.
    pub day_name: &'static str,
    /// Locale-independent `MM-DD` label.
    pub date_label: String,
    pub completion_rate: u8,
}

/// Computes completion rates for the week containing `anchor`.
///
/// Days with no stored record load as the empty default and report a rate
/// of zero.
pub fn weekly_overview<S: RecordStore>(
    store: &S,
    anchor: DateKey,
) -> RepoResult<Vec<DayCompletion>> {
    let week_start = anchor.week_start();

    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = week_start.offset_days(offset);
        let record = store.load(date)?;
        let stats = task_service::task_stats(&record);

        days.push(DayCompletion {
            date,
            day_name: date.day_name(),
            date_label: date.short_label(),
            completion_rate: stats.rate,
        });
    }

    Ok(days)
}
