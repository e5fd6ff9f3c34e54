//! Core domain logic for the dayplan daily planner.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date_key::{DateKey, InvalidDateKey};
pub use model::day_record::{
    DayRecord, Difficulty, EntryId, Minutes, PracticeActivity, StudyTopic, Task,
};
pub use repo::record_store::{RecordStore, RepoError, RepoResult, SqliteRecordStore};
pub use service::practice_service::{PracticeDraft, PracticeSummary};
pub use service::session::PlannerSession;
pub use service::study_service::{StudySummary, StudyTopicDraft};
pub use service::task_service::{TaskDraft, TaskStats};
pub use service::week_service::{weekly_overview, DayCompletion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
