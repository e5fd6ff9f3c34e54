//! Timed task manager.
//!
//! # Responsibility
//! - Create, update, delete and toggle tasks on one day record.
//! - Derive completion statistics.
//!
//! # Invariants
//! - The task list is re-sorted by start time after every insert or update.
//! - Unknown ids are silent no-ops; callers never see a NotFound here.

use crate::model::day_record::{DayRecord, EntryId, Task};
use uuid::Uuid;

/// Caller-provided task fields, as entered in a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Zero-padded 24h `HH:MM`.
    pub start_time: String,
    pub end_time: String,
    pub name: String,
    pub category: String,
}

/// Completion statistics for one day's task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// Percent of completed tasks, rounded half-up; 0 for an empty list.
    pub rate: u8,
}

/// Inserts a new task and returns it.
///
/// # Contract
/// - Fresh id, `completed = false`.
/// - The list is left sorted ascending by `start_time`.
pub fn add_task(record: &mut DayRecord, draft: &TaskDraft) -> Task {
    let task = Task {
        id: Uuid::new_v4(),
        start_time: draft.start_time.clone(),
        end_time: draft.end_time.clone(),
        name: draft.name.clone(),
        category: draft.category.clone(),
        completed: false,
    };

    record.tasks.push(task.clone());
    record.sort_tasks();
    task
}

/// Overwrites the editable fields of the task with `id`.
///
/// `completed` is deliberately left untouched. Returns whether a task was
/// found; a miss leaves the record unchanged.
pub fn update_task(record: &mut DayRecord, id: EntryId, draft: &TaskDraft) -> bool {
    match record.tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.start_time = draft.start_time.clone();
            task.end_time = draft.end_time.clone();
            task.name = draft.name.clone();
            task.category = draft.category.clone();
        }
        None => return false,
    }

    record.sort_tasks();
    true
}

/// Removes the task with `id`. Returns whether anything was removed.
pub fn delete_task(record: &mut DayRecord, id: EntryId) -> bool {
    let before = record.tasks.len();
    record.tasks.retain(|task| task.id != id);
    record.tasks.len() != before
}

/// Flips the completion flag of the task with `id`.
pub fn toggle_task(record: &mut DayRecord, id: EntryId) -> bool {
    match record.tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Completion statistics with half-up integer rounding.
pub fn task_stats(record: &DayRecord) -> TaskStats {
    let total = record.tasks.len();
    let completed = record.tasks.iter().filter(|task| task.completed).count();
    let rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    TaskStats {
        total,
        completed,
        rate,
    }
}
