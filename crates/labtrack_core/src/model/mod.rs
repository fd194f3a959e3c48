//! Domain model for the scientist/experiment/result hierarchy.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own required-field validation for every record shape.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Ownership is strict: Experiment belongs to one Scientist, Result
//!   belongs to one Experiment.

pub mod experiment;
pub mod lab_result;
pub mod scientist;
pub mod validation;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
