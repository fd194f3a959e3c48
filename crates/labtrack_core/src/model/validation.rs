//! Field-level validation primitives.
//!
//! # Responsibility
//! - Collect human-readable per-field errors in a stable message format.
//!
//! # Invariants
//! - Message format is `"<Field> can't be blank"` with a capitalized
//!   field label; clients parse these strings verbatim.
//! - Presence means non-empty after trimming whitespace.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accumulated validation failures for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a blank-field error when `value` is empty after trimming.
    pub(crate) fn require_present(&mut self, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(format!("{label} can't be blank"));
        }
    }

    /// Converts the accumulator into a validation result.
    pub(crate) fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// One message per failing field, in field declaration order.
    pub fn messages(&self) -> &[String] {
        &self.errors
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

impl Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::ValidationErrors;

    #[test]
    fn require_present_rejects_whitespace_only_values() {
        let mut errors = ValidationErrors::new();
        errors.require_present("Name", "  \t ");
        errors.require_present("Field", "Mathematics");

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.messages(), ["Name can't be blank"]);
    }

    #[test]
    fn empty_accumulator_is_ok() {
        let mut errors = ValidationErrors::new();
        errors.require_present("Name", "Ada");
        assert!(errors.into_result().is_ok());
    }
}
