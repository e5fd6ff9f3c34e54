//! Core use-case services.
//!
//! # Responsibility
//! - Provide stateless entry mutations over an explicit `DayRecord`.
//! - Orchestrate store round-trips from one thin session layer.
//!
//! # Invariants
//! - Entry mutations never touch storage themselves; only the session
//!   persists, write-through on every mutating operation.

pub mod practice_service;
pub mod session;
pub mod study_service;
pub mod task_service;
pub mod week_service;

/// Trims form input; blank values collapse to unset.
pub(crate) fn trimmed_or_unset(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
