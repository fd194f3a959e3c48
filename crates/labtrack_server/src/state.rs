//! Shared application state.
//!
//! # Invariants
//! - The SQLite connection is the only shared mutable resource; each
//!   request holds the lock for exactly one store operation, so cascades
//!   are never observed half-applied by other requests.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to the shared, migrated SQLite connection.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection (see `labtrack_core::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquires the connection for one store operation.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn
            .lock()
            .map_err(|_| ApiError::Internal("database mutex poisoned".to_string()))
    }
}
