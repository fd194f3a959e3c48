//! Core domain logic for LabTrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::experiment::{Experiment, ExperimentId};
pub use model::lab_result::{LabResult, LabResultId};
pub use model::scientist::{Scientist, ScientistId};
pub use model::validation::ValidationErrors;
pub use repo::experiment_repo::{ExperimentRepository, SqliteExperimentRepository};
pub use repo::result_repo::{ResultRepository, SqliteResultRepository};
pub use repo::scientist_repo::{ScientistRepository, SqliteScientistRepository};
pub use repo::{RepoError, RepoResult};
pub use service::experiment_service::ExperimentService;
pub use service::result_service::ResultService;
pub use service::scientist_service::ScientistService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
