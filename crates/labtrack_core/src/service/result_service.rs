//! Result use-case service.

use crate::model::experiment::ExperimentId;
use crate::model::lab_result::{LabResult, LabResultId};
use crate::repo::result_repo::ResultRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for result CRUD operations.
pub struct ResultService<R: ResultRepository> {
    repo: R,
}

impl<R: ResultRepository> ResultService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new result through repository persistence.
    pub fn create_result(&self, result: &LabResult) -> RepoResult<LabResultId> {
        self.repo.create_result(result)
    }

    /// Updates an existing result by stable ID.
    pub fn update_result(&self, result: &LabResult) -> RepoResult<()> {
        self.repo.update_result(result)
    }

    /// Gets one result by ID.
    pub fn get_result(&self, id: LabResultId) -> RepoResult<Option<LabResult>> {
        self.repo.get_result(id)
    }

    /// Lists results, optionally scoped to one owning experiment.
    pub fn list_results(&self, experiment_id: Option<ExperimentId>) -> RepoResult<Vec<LabResult>> {
        self.repo.list_results(experiment_id)
    }

    /// Deletes a result by ID.
    pub fn delete_result(&self, id: LabResultId) -> RepoResult<()> {
        self.repo.delete_result(id)
    }
}
