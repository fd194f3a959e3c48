//! Scientist repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `scientists` table.
//! - Own the transitive cascade delete for a scientist's subtree.
//!
//! # Invariants
//! - Write paths call `Scientist::validate()` before SQL mutations.
//! - Cascade delete removes results, then experiments, then the scientist,
//!   inside one transaction.

use crate::model::scientist::{Scientist, ScientistId};
use crate::repo::{ensure_connection_ready, parse_stored_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const SCIENTIST_SELECT_SQL: &str = "SELECT
    id,
    name,
    field,
    created_at,
    updated_at
FROM scientists";

/// Repository interface for scientist CRUD operations.
pub trait ScientistRepository {
    fn create_scientist(&self, scientist: &Scientist) -> RepoResult<ScientistId>;
    fn update_scientist(&self, scientist: &Scientist) -> RepoResult<()>;
    fn get_scientist(&self, id: ScientistId) -> RepoResult<Option<Scientist>>;
    fn list_scientists(&self) -> RepoResult<Vec<Scientist>>;
    fn delete_scientist(&self, id: ScientistId) -> RepoResult<()>;
}

/// SQLite-backed scientist repository.
pub struct SqliteScientistRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScientistRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "scientists")?;
        Ok(Self { conn })
    }
}

impl ScientistRepository for SqliteScientistRepository<'_> {
    fn create_scientist(&self, scientist: &Scientist) -> RepoResult<ScientistId> {
        scientist.validate()?;

        self.conn.execute(
            "INSERT INTO scientists (id, name, field, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                scientist.id.to_string(),
                scientist.name.as_str(),
                scientist.field.as_str(),
                scientist.created_at,
                scientist.updated_at,
            ],
        )?;

        Ok(scientist.id)
    }

    fn update_scientist(&self, scientist: &Scientist) -> RepoResult<()> {
        scientist.validate()?;

        let changed = self.conn.execute(
            "UPDATE scientists
             SET name = ?1, field = ?2, updated_at = ?3
             WHERE id = ?4;",
            params![
                scientist.name.as_str(),
                scientist.field.as_str(),
                scientist.updated_at,
                scientist.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(scientist.id));
        }

        Ok(())
    }

    fn get_scientist(&self, id: ScientistId) -> RepoResult<Option<Scientist>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCIENTIST_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_scientist_row(row)?));
        }

        Ok(None)
    }

    fn list_scientists(&self) -> RepoResult<Vec<Scientist>> {
        // rowid order keeps listings in insertion order.
        let mut stmt = self
            .conn
            .prepare(&format!("{SCIENTIST_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut scientists = Vec::new();
        while let Some(row) = rows.next()? {
            scientists.push(parse_scientist_row(row)?);
        }

        Ok(scientists)
    }

    fn delete_scientist(&self, id: ScientistId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM results
             WHERE experiment_id IN (
                SELECT id FROM experiments WHERE scientist_id = ?1
             );",
            [id.to_string()],
        )?;
        tx.execute(
            "DELETE FROM experiments WHERE scientist_id = ?1;",
            [id.to_string()],
        )?;
        let changed = tx.execute("DELETE FROM scientists WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            // Dropping the transaction rolls back the child deletes.
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_scientist_row(row: &Row<'_>) -> RepoResult<Scientist> {
    let id_text: String = row.get("id")?;
    let scientist = Scientist {
        id: parse_stored_uuid(&id_text, "scientists.id")?,
        name: row.get("name")?,
        field: row.get("field")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    scientist.validate()?;
    Ok(scientist)
}
