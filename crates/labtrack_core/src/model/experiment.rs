//! Experiment domain model.
//!
//! # Invariants
//! - Every experiment is owned by exactly one scientist.
//! - `title` must be non-blank for every persisted row.

use crate::model::now_epoch_ms;
use crate::model::scientist::ScientistId;
use crate::model::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an experiment record.
pub type ExperimentId = Uuid;

/// Mid-level record: owned by a scientist, owns results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    /// Stable global ID used for routing and child ownership.
    pub id: ExperimentId,
    /// Short description of the experiment. Required, non-blank.
    pub title: String,
    /// Owning scientist. Enforced by a foreign key at the store level.
    pub scientist_id: ScientistId,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Experiment {
    /// Creates a new experiment under the given scientist.
    pub fn new(scientist_id: ScientistId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), scientist_id, title)
    }

    /// Creates an experiment with a caller-provided stable ID.
    pub fn with_id(
        id: ExperimentId,
        scientist_id: ScientistId,
        title: impl Into<String>,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            title: title.into(),
            scientist_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks required-field presence.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_present("Title", &self.title);
        errors.into_result()
    }

    /// Refreshes `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms();
    }
}
