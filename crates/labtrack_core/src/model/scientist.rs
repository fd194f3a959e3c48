//! Scientist domain model.
//!
//! # Responsibility
//! - Define the root record of the ownership hierarchy.
//! - Provide construction and presence validation for its fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another scientist.
//! - `name` and `field` must be non-blank for every persisted row.

use crate::model::validation::ValidationErrors;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a scientist record.
pub type ScientistId = Uuid;

/// Root record of the Scientist -> Experiment -> Result hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scientist {
    /// Stable global ID used for routing and child ownership.
    pub id: ScientistId,
    /// Display name. Required, non-blank.
    pub name: String,
    /// Research discipline. Required, non-blank.
    pub field: String,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
    /// Last mutation time in Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Scientist {
    /// Creates a new scientist with a generated stable ID.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, field)
    }

    /// Creates a scientist with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: ScientistId, name: impl Into<String>, field: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            name: name.into(),
            field: field.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks required-field presence.
    ///
    /// # Contract
    /// - Returns one error message per blank field, in declaration order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_present("Name", &self.name);
        errors.require_present("Field", &self.field);
        errors.into_result()
    }

    /// Refreshes `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms();
    }
}
