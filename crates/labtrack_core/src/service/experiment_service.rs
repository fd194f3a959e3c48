//! Experiment use-case service.

use crate::model::experiment::{Experiment, ExperimentId};
use crate::model::scientist::ScientistId;
use crate::repo::experiment_repo::ExperimentRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for experiment CRUD operations.
pub struct ExperimentService<R: ExperimentRepository> {
    repo: R,
}

impl<R: ExperimentRepository> ExperimentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new experiment through repository persistence.
    pub fn create_experiment(&self, experiment: &Experiment) -> RepoResult<ExperimentId> {
        self.repo.create_experiment(experiment)
    }

    /// Updates an existing experiment by stable ID.
    pub fn update_experiment(&self, experiment: &Experiment) -> RepoResult<()> {
        self.repo.update_experiment(experiment)
    }

    /// Gets one experiment by ID.
    pub fn get_experiment(&self, id: ExperimentId) -> RepoResult<Option<Experiment>> {
        self.repo.get_experiment(id)
    }

    /// Lists experiments, optionally scoped to one owning scientist.
    pub fn list_experiments(
        &self,
        scientist_id: Option<ScientistId>,
    ) -> RepoResult<Vec<Experiment>> {
        self.repo.list_experiments(scientist_id)
    }

    /// Deletes an experiment and, transitively, its results.
    pub fn delete_experiment(&self, id: ExperimentId) -> RepoResult<()> {
        self.repo.delete_experiment(id)
    }
}
