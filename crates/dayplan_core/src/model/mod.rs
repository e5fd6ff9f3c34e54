//! Planner domain model.
//!
//! # Responsibility
//! - Define the canonical per-day record and its entry types.
//! - Define the calendar key addressing one day's record.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - One `DayRecord` exists per `DateKey`, lazily defaulted on first read.

pub mod date_key;
pub mod day_record;
