//! Resource handlers, one module per entity.
//!
//! # Invariants
//! - Nested routes resolve the parent record first and 404 when it is
//!   missing, before touching the child table.
//! - Update paths apply only permitted fields; unknown body keys are
//!   silently ignored.

pub mod experiments;
pub mod health;
pub mod results;
pub mod scientists;
