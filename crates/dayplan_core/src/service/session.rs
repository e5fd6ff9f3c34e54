//! Planner session over one active day.
//!
//! # Responsibility
//! - Own the currently selected date and its in-memory record.
//! - Run every mutation as operate→store with immediate write-through.
//!
//! # Invariants
//! - Between operations the in-memory record is the source of truth for the
//!   active date; every mutation is flushed before returning.
//! - Recurring inserts write all target days before the active record is
//!   reloaded.

use crate::model::date_key::DateKey;
use crate::model::day_record::{DayRecord, EntryId, PracticeActivity, StudyTopic, Task};
use crate::repo::record_store::{RecordStore, RepoResult};
use crate::service::practice_service::{self, PracticeDraft, PracticeSummary};
use crate::service::study_service::{self, StudySummary, StudyTopicDraft};
use crate::service::task_service::{self, TaskDraft, TaskStats};
use crate::service::week_service::{self, DayCompletion};
use log::{debug, info};

/// Single-user working context: one store, one selected day.
///
/// Managers stay pure over an explicit `DayRecord`; this layer is the only
/// place that pairs them with storage.
pub struct PlannerSession<S: RecordStore> {
    store: S,
    date: DateKey,
    record: DayRecord,
}

impl<S: RecordStore> PlannerSession<S> {
    /// Opens a session on `date`, loading (or lazily defaulting) its record.
    pub fn open(store: S, date: DateKey) -> RepoResult<Self> {
        let record = store.load(date)?;
        Ok(Self {
            store,
            date,
            record,
        })
    }

    /// The active date.
    pub fn date(&self) -> DateKey {
        self.date
    }

    /// The active day's record, as the presentation layer should see it.
    pub fn record(&self) -> &DayRecord {
        &self.record
    }

    /// Switches the active day and loads its record.
    pub fn select_date(&mut self, date: DateKey) -> RepoResult<()> {
        self.record = self.store.load(date)?;
        self.date = date;
        debug!("event=select_date module=session status=ok date={date}");
        Ok(())
    }

    /// Adds a task to the active day and persists the record.
    pub fn add_task(&mut self, draft: &TaskDraft) -> RepoResult<Task> {
        let task = task_service::add_task(&mut self.record, draft);
        self.flush()?;
        Ok(task)
    }

    /// Replicates `draft` into `num_days` consecutive days from `start`.
    ///
    /// Each target day is loaded independently and receives a task with its
    /// own fresh id; the copies are not linked. All target days are written
    /// before the active record is reloaded, so an active date inside the
    /// range picks up its new task.
    pub fn add_recurring_task(
        &mut self,
        start: DateKey,
        draft: &TaskDraft,
        num_days: u32,
    ) -> RepoResult<()> {
        for offset in 0..num_days {
            let date = start.offset_days(i64::from(offset));
            let mut record = self.store.load(date)?;
            task_service::add_task(&mut record, draft);
            self.store.save(date, &record)?;
        }

        self.record = self.store.load(self.date)?;
        info!("event=recurring_add module=session status=ok start={start} days={num_days}");
        Ok(())
    }

    /// Overwrites the editable fields of a task; unknown ids are no-ops.
    pub fn update_task(&mut self, id: EntryId, draft: &TaskDraft) -> RepoResult<()> {
        task_service::update_task(&mut self.record, id, draft);
        self.flush()
    }

    /// Removes a task; persists whether or not anything was removed.
    pub fn delete_task(&mut self, id: EntryId) -> RepoResult<()> {
        task_service::delete_task(&mut self.record, id);
        self.flush()
    }

    /// Flips a task's completion flag; unknown ids are no-ops.
    pub fn toggle_task(&mut self, id: EntryId) -> RepoResult<()> {
        task_service::toggle_task(&mut self.record, id);
        self.flush()
    }

    /// Completion statistics for the active day.
    pub fn task_stats(&self) -> TaskStats {
        task_service::task_stats(&self.record)
    }

    /// Adds a study topic stamped with the active date.
    ///
    /// A topic that trims to empty is declined and nothing is persisted.
    pub fn add_study_topic(&mut self, draft: &StudyTopicDraft) -> RepoResult<Option<StudyTopic>> {
        let added = study_service::add_study_topic(&mut self.record, draft, self.date);
        if added.is_some() {
            self.flush()?;
        }
        Ok(added)
    }

    /// Removes a study topic; persists regardless.
    pub fn delete_study_topic(&mut self, id: EntryId) -> RepoResult<()> {
        study_service::delete_study_topic(&mut self.record, id);
        self.flush()
    }

    /// Study summary for the active day.
    pub fn study_summary(&self) -> StudySummary {
        study_service::study_summary(&self.record)
    }

    /// Adds a practice activity stamped with the active date.
    pub fn add_practice_activity(
        &mut self,
        draft: &PracticeDraft,
    ) -> RepoResult<PracticeActivity> {
        let entry = practice_service::add_practice_activity(&mut self.record, draft, self.date);
        self.flush()?;
        Ok(entry)
    }

    /// Removes a practice activity; persists regardless.
    pub fn delete_practice_activity(&mut self, id: EntryId) -> RepoResult<()> {
        practice_service::delete_practice_activity(&mut self.record, id);
        self.flush()
    }

    /// Practice summary for the active day.
    pub fn practice_summary(&self) -> PracticeSummary {
        practice_service::practice_summary(&self.record)
    }

    /// Weekly completion overview anchored on the active date.
    pub fn weekly_overview(&self) -> RepoResult<Vec<DayCompletion>> {
        week_service::weekly_overview(&self.store, self.date)
    }

    /// Wipes every stored day and resets the active record.
    pub fn clear_all(&mut self) -> RepoResult<()> {
        self.store.clear_all()?;
        self.record = DayRecord::default();
        info!("event=clear_all module=session status=ok");
        Ok(())
    }

    fn flush(&self) -> RepoResult<()> {
        self.store.save(self.date, &self.record)
    }
}
