//! Server entry point.
//!
//! # Responsibility
//! - Read environment configuration once at startup.
//! - Bootstrap logging and the database, then serve the router.

use labtrack_server::{app, AppState};
use log::info;
use std::error::Error;

const DEFAULT_DB_PATH: &str = "labtrack.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("LABTRACK_LOG_LEVEL")
        .unwrap_or_else(|_| labtrack_core::default_log_level().to_string());
    if let Ok(log_dir) = std::env::var("LABTRACK_LOG_DIR") {
        labtrack_core::init_logging(&level, &log_dir)?;
    }

    let db_path = std::env::var("LABTRACK_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let conn = labtrack_core::db::open_db(&db_path)?;
    let state = AppState::new(conn);

    let addr =
        std::env::var("LABTRACK_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "event=server_start module=server status=ok addr={addr} db={db_path} version={}",
        labtrack_core::core_version()
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
