//! Result resource handlers.
//!
//! Nested under `/experiments/:experiment_id` for list/create; addressed
//! directly by id otherwise.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use labtrack_core::{
    Experiment, ExperimentId, ExperimentRepository, LabResult, LabResultId, ResultService,
    SqliteExperimentRepository, SqliteResultRepository,
};
use log::info;
use rusqlite::Connection;
use serde::Deserialize;

/// Permitted fields for create/update. Unknown keys are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ResultPayload {
    #[serde(default)]
    pub value: Option<String>,
}

/// Resolves the owning experiment or fails the request with 404.
fn resolve_experiment(conn: &Connection, id: ExperimentId) -> Result<Experiment, ApiError> {
    let repo = SqliteExperimentRepository::try_new(conn)?;
    repo.get_experiment(id)?.ok_or(ApiError::NotFound)
}

/// `GET /experiments/:experiment_id/results`
pub async fn index(
    State(state): State<AppState>,
    Path(experiment_id): Path<ExperimentId>,
) -> Result<Json<Vec<LabResult>>, ApiError> {
    let conn = state.conn()?;
    let experiment = resolve_experiment(&conn, experiment_id)?;

    let service = ResultService::new(SqliteResultRepository::try_new(&conn)?);
    Ok(Json(service.list_results(Some(experiment.id))?))
}

/// `GET /results/:id`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<LabResultId>,
) -> Result<Json<LabResult>, ApiError> {
    let conn = state.conn()?;
    let service = ResultService::new(SqliteResultRepository::try_new(&conn)?);
    service.get_result(id)?.map(Json).ok_or(ApiError::NotFound)
}

/// `POST /experiments/:experiment_id/results`
pub async fn create(
    State(state): State<AppState>,
    Path(experiment_id): Path<ExperimentId>,
    Json(payload): Json<ResultPayload>,
) -> Result<(StatusCode, Json<LabResult>), ApiError> {
    let conn = state.conn()?;
    let experiment = resolve_experiment(&conn, experiment_id)?;

    let service = ResultService::new(SqliteResultRepository::try_new(&conn)?);
    let result = LabResult::new(experiment.id, payload.value.unwrap_or_default());
    service.create_result(&result)?;

    info!(
        "event=result_create module=server status=ok id={} experiment_id={}",
        result.id, experiment.id
    );
    Ok((StatusCode::CREATED, Json(result)))
}

/// `PATCH /results/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<LabResultId>,
    Json(payload): Json<ResultPayload>,
) -> Result<Json<LabResult>, ApiError> {
    let conn = state.conn()?;
    let service = ResultService::new(SqliteResultRepository::try_new(&conn)?);

    let mut result = service.get_result(id)?.ok_or(ApiError::NotFound)?;
    if let Some(value) = payload.value {
        result.value = value;
    }
    result.touch();
    service.update_result(&result)?;

    Ok(Json(result))
}

/// `DELETE /results/:id`
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<LabResultId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    let service = ResultService::new(SqliteResultRepository::try_new(&conn)?);

    service.delete_result(id)?;
    info!("event=result_delete module=server status=ok id={id}");
    Ok(StatusCode::NO_CONTENT)
}
