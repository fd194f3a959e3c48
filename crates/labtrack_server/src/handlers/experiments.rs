//! Experiment resource handlers.
//!
//! Nested under `/scientists/:scientist_id` for list/create; addressed
//! directly by id otherwise.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use labtrack_core::{
    Experiment, ExperimentId, ExperimentService, Scientist, ScientistId, ScientistRepository,
    SqliteExperimentRepository, SqliteScientistRepository,
};
use log::info;
use rusqlite::Connection;
use serde::Deserialize;

/// Permitted fields for create/update. Unknown keys are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ExperimentPayload {
    #[serde(default)]
    pub title: Option<String>,
}

/// Resolves the owning scientist or fails the request with 404.
fn resolve_scientist(conn: &Connection, id: ScientistId) -> Result<Scientist, ApiError> {
    let repo = SqliteScientistRepository::try_new(conn)?;
    repo.get_scientist(id)?.ok_or(ApiError::NotFound)
}

/// `GET /scientists/:scientist_id/experiments`
pub async fn index(
    State(state): State<AppState>,
    Path(scientist_id): Path<ScientistId>,
) -> Result<Json<Vec<Experiment>>, ApiError> {
    let conn = state.conn()?;
    let scientist = resolve_scientist(&conn, scientist_id)?;

    let service = ExperimentService::new(SqliteExperimentRepository::try_new(&conn)?);
    Ok(Json(service.list_experiments(Some(scientist.id))?))
}

/// `GET /experiments/:id`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ExperimentId>,
) -> Result<Json<Experiment>, ApiError> {
    let conn = state.conn()?;
    let service = ExperimentService::new(SqliteExperimentRepository::try_new(&conn)?);
    service.get_experiment(id)?.map(Json).ok_or(ApiError::NotFound)
}

/// `POST /scientists/:scientist_id/experiments`
pub async fn create(
    State(state): State<AppState>,
    Path(scientist_id): Path<ScientistId>,
    Json(payload): Json<ExperimentPayload>,
) -> Result<(StatusCode, Json<Experiment>), ApiError> {
    let conn = state.conn()?;
    let scientist = resolve_scientist(&conn, scientist_id)?;

    let service = ExperimentService::new(SqliteExperimentRepository::try_new(&conn)?);
    let experiment = Experiment::new(scientist.id, payload.title.unwrap_or_default());
    service.create_experiment(&experiment)?;

    info!(
        "event=experiment_create module=server status=ok id={} scientist_id={}",
        experiment.id, scientist.id
    );
    Ok((StatusCode::CREATED, Json(experiment)))
}

/// `PATCH /experiments/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ExperimentId>,
    Json(payload): Json<ExperimentPayload>,
) -> Result<Json<Experiment>, ApiError> {
    let conn = state.conn()?;
    let service = ExperimentService::new(SqliteExperimentRepository::try_new(&conn)?);

    let mut experiment = service.get_experiment(id)?.ok_or(ApiError::NotFound)?;
    if let Some(title) = payload.title {
        experiment.title = title;
    }
    experiment.touch();
    service.update_experiment(&experiment)?;

    Ok(Json(experiment))
}

/// `DELETE /experiments/:id` — cascades to results.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ExperimentId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    let service = ExperimentService::new(SqliteExperimentRepository::try_new(&conn)?);

    service.delete_experiment(id)?;
    info!("event=experiment_delete module=server status=ok id={id}");
    Ok(StatusCode::NO_CONTENT)
}
