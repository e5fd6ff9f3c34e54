//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key→record data access contract the core requires.
//! - Isolate SQL and payload codec details from service orchestration.
//!
//! # Invariants
//! - An absent date loads as the empty default record, never as an error.
//! - Writes replace the whole stored record for their date key.

pub mod record_store;
