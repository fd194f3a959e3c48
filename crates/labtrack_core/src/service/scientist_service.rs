//! Scientist use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::scientist::{Scientist, ScientistId};
use crate::repo::scientist_repo::ScientistRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for scientist CRUD operations.
pub struct ScientistService<R: ScientistRepository> {
    repo: R,
}

impl<R: ScientistRepository> ScientistService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new scientist through repository persistence.
    pub fn create_scientist(&self, scientist: &Scientist) -> RepoResult<ScientistId> {
        self.repo.create_scientist(scientist)
    }

    /// Updates an existing scientist by stable ID.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_scientist(&self, scientist: &Scientist) -> RepoResult<()> {
        self.repo.update_scientist(scientist)
    }

    /// Gets one scientist by ID.
    pub fn get_scientist(&self, id: ScientistId) -> RepoResult<Option<Scientist>> {
        self.repo.get_scientist(id)
    }

    /// Lists all scientists in insertion order.
    pub fn list_scientists(&self) -> RepoResult<Vec<Scientist>> {
        self.repo.list_scientists()
    }

    /// Deletes a scientist and, transitively, its experiments and results.
    pub fn delete_scientist(&self, id: ScientistId) -> RepoResult<()> {
        self.repo.delete_scientist(id)
    }
}
