//! Result repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `results` table.
//! - Support parent-scoped listing for nested routes.
//!
//! # Invariants
//! - Write paths call `LabResult::validate()` before SQL mutations.
//! - Parent existence is enforced by the `experiment_id` foreign key.

use crate::model::experiment::ExperimentId;
use crate::model::lab_result::{LabResult, LabResultId};
use crate::repo::{ensure_connection_ready, parse_stored_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const RESULT_SELECT_SQL: &str = "SELECT
    id,
    value,
    experiment_id,
    created_at,
    updated_at
FROM results";

/// Repository interface for result CRUD operations.
pub trait ResultRepository {
    fn create_result(&self, result: &LabResult) -> RepoResult<LabResultId>;
    fn update_result(&self, result: &LabResult) -> RepoResult<()>;
    fn get_result(&self, id: LabResultId) -> RepoResult<Option<LabResult>>;
    /// Lists all results, or only those owned by `experiment_id`.
    fn list_results(&self, experiment_id: Option<ExperimentId>) -> RepoResult<Vec<LabResult>>;
    fn delete_result(&self, id: LabResultId) -> RepoResult<()>;
}

/// SQLite-backed result repository.
pub struct SqliteResultRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteResultRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "results")?;
        Ok(Self { conn })
    }
}

impl ResultRepository for SqliteResultRepository<'_> {
    fn create_result(&self, result: &LabResult) -> RepoResult<LabResultId> {
        result.validate()?;

        self.conn.execute(
            "INSERT INTO results (id, value, experiment_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                result.id.to_string(),
                result.value.as_str(),
                result.experiment_id.to_string(),
                result.created_at,
                result.updated_at,
            ],
        )?;

        Ok(result.id)
    }

    fn update_result(&self, result: &LabResult) -> RepoResult<()> {
        result.validate()?;

        let changed = self.conn.execute(
            "UPDATE results
             SET value = ?1, updated_at = ?2
             WHERE id = ?3;",
            params![
                result.value.as_str(),
                result.updated_at,
                result.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(result.id));
        }

        Ok(())
    }

    fn get_result(&self, id: LabResultId) -> RepoResult<Option<LabResult>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESULT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_result_row(row)?));
        }

        Ok(None)
    }

    fn list_results(&self, experiment_id: Option<ExperimentId>) -> RepoResult<Vec<LabResult>> {
        let mut sql = RESULT_SELECT_SQL.to_string();
        if experiment_id.is_some() {
            sql.push_str(" WHERE experiment_id = ?1");
        }
        sql.push_str(" ORDER BY rowid ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut results = Vec::new();

        let mut rows = match experiment_id {
            Some(owner) => stmt.query([owner.to_string()])?,
            None => stmt.query([])?,
        };
        while let Some(row) = rows.next()? {
            results.push(parse_result_row(row)?);
        }

        Ok(results)
    }

    fn delete_result(&self, id: LabResultId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM results WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_result_row(row: &Row<'_>) -> RepoResult<LabResult> {
    let id_text: String = row.get("id")?;
    let owner_text: String = row.get("experiment_id")?;
    let result = LabResult {
        id: parse_stored_uuid(&id_text, "results.id")?,
        value: row.get("value")?,
        experiment_id: parse_stored_uuid(&owner_text, "results.experiment_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    result.validate()?;
    Ok(result)
}
