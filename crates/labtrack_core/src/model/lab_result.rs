//! Result domain model.
//!
//! Named `LabResult` in code to avoid clashing with `std::result::Result`;
//! storage and JSON keep the plain `results`/`result` naming.
//!
//! # Invariants
//! - Every result is owned by exactly one experiment.
//! - `value` must be non-blank for every persisted row.

use crate::model::experiment::ExperimentId;
use crate::model::now_epoch_ms;
use crate::model::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a result record.
pub type LabResultId = Uuid;

/// Leaf record of the hierarchy: a single measured outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    /// Stable global ID used for routing.
    pub id: LabResultId,
    /// Recorded outcome. Required, non-blank.
    pub value: String,
    /// Owning experiment. Enforced by a foreign key at the store level.
    pub experiment_id: ExperimentId,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in Unix epoch milliseconds.
    pub updated_at: i64,
}

impl LabResult {
    /// Creates a new result under the given experiment.
    pub fn new(experiment_id: ExperimentId, value: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), experiment_id, value)
    }

    /// Creates a result with a caller-provided stable ID.
    pub fn with_id(
        id: LabResultId,
        experiment_id: ExperimentId,
        value: impl Into<String>,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            value: value.into(),
            experiment_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks required-field presence.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_present("Value", &self.value);
        errors.into_result()
    }

    /// Refreshes `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms();
    }
}
