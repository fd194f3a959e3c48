//! Experiment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `experiments` table.
//! - Support parent-scoped listing for nested routes.
//!
//! # Invariants
//! - Write paths call `Experiment::validate()` before SQL mutations.
//! - Deleting an experiment removes its results in the same transaction.
//! - Parent existence is enforced by the `scientist_id` foreign key.

use crate::model::experiment::{Experiment, ExperimentId};
use crate::model::scientist::ScientistId;
use crate::repo::{ensure_connection_ready, parse_stored_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const EXPERIMENT_SELECT_SQL: &str = "SELECT
    id,
    title,
    scientist_id,
    created_at,
    updated_at
FROM experiments";

/// Repository interface for experiment CRUD operations.
pub trait ExperimentRepository {
    fn create_experiment(&self, experiment: &Experiment) -> RepoResult<ExperimentId>;
    fn update_experiment(&self, experiment: &Experiment) -> RepoResult<()>;
    fn get_experiment(&self, id: ExperimentId) -> RepoResult<Option<Experiment>>;
    /// Lists all experiments, or only those owned by `scientist_id`.
    fn list_experiments(&self, scientist_id: Option<ScientistId>) -> RepoResult<Vec<Experiment>>;
    fn delete_experiment(&self, id: ExperimentId) -> RepoResult<()>;
}

/// SQLite-backed experiment repository.
pub struct SqliteExperimentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExperimentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "experiments")?;
        Ok(Self { conn })
    }
}

impl ExperimentRepository for SqliteExperimentRepository<'_> {
    fn create_experiment(&self, experiment: &Experiment) -> RepoResult<ExperimentId> {
        experiment.validate()?;

        self.conn.execute(
            "INSERT INTO experiments (id, title, scientist_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                experiment.id.to_string(),
                experiment.title.as_str(),
                experiment.scientist_id.to_string(),
                experiment.created_at,
                experiment.updated_at,
            ],
        )?;

        Ok(experiment.id)
    }

    fn update_experiment(&self, experiment: &Experiment) -> RepoResult<()> {
        experiment.validate()?;

        let changed = self.conn.execute(
            "UPDATE experiments
             SET title = ?1, updated_at = ?2
             WHERE id = ?3;",
            params![
                experiment.title.as_str(),
                experiment.updated_at,
                experiment.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(experiment.id));
        }

        Ok(())
    }

    fn get_experiment(&self, id: ExperimentId) -> RepoResult<Option<Experiment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EXPERIMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_experiment_row(row)?));
        }

        Ok(None)
    }

    fn list_experiments(&self, scientist_id: Option<ScientistId>) -> RepoResult<Vec<Experiment>> {
        let mut sql = EXPERIMENT_SELECT_SQL.to_string();
        if scientist_id.is_some() {
            sql.push_str(" WHERE scientist_id = ?1");
        }
        sql.push_str(" ORDER BY rowid ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut experiments = Vec::new();

        let mut rows = match scientist_id {
            Some(owner) => stmt.query([owner.to_string()])?,
            None => stmt.query([])?,
        };
        while let Some(row) = rows.next()? {
            experiments.push(parse_experiment_row(row)?);
        }

        Ok(experiments)
    }

    fn delete_experiment(&self, id: ExperimentId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM results WHERE experiment_id = ?1;",
            [id.to_string()],
        )?;
        let changed = tx.execute("DELETE FROM experiments WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_experiment_row(row: &Row<'_>) -> RepoResult<Experiment> {
    let id_text: String = row.get("id")?;
    let owner_text: String = row.get("scientist_id")?;
    let experiment = Experiment {
        id: parse_stored_uuid(&id_text, "experiments.id")?,
        title: row.get("title")?,
        scientist_id: parse_stored_uuid(&owner_text, "experiments.scientist_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    experiment.validate()?;
    Ok(experiment)
}
