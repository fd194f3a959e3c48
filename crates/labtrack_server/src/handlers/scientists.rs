//! Scientist resource handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use labtrack_core::{Scientist, ScientistId, ScientistService, SqliteScientistRepository};
use log::info;
use serde::Deserialize;

/// Permitted fields for create/update. Unknown keys are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct ScientistPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

/// `GET /scientists`
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Scientist>>, ApiError> {
    let conn = state.conn()?;
    let service = ScientistService::new(SqliteScientistRepository::try_new(&conn)?);
    Ok(Json(service.list_scientists()?))
}

/// `GET /scientists/:id`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ScientistId>,
) -> Result<Json<Scientist>, ApiError> {
    let conn = state.conn()?;
    let service = ScientistService::new(SqliteScientistRepository::try_new(&conn)?);
    service.get_scientist(id)?.map(Json).ok_or(ApiError::NotFound)
}

/// `POST /scientists`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ScientistPayload>,
) -> Result<(StatusCode, Json<Scientist>), ApiError> {
    let conn = state.conn()?;
    let service = ScientistService::new(SqliteScientistRepository::try_new(&conn)?);

    let scientist = Scientist::new(
        payload.name.unwrap_or_default(),
        payload.field.unwrap_or_default(),
    );
    service.create_scientist(&scientist)?;

    info!("event=scientist_create module=server status=ok id={}", scientist.id);
    Ok((StatusCode::CREATED, Json(scientist)))
}

/// `PATCH /scientists/:id`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ScientistId>,
    Json(payload): Json<ScientistPayload>,
) -> Result<Json<Scientist>, ApiError> {
    let conn = state.conn()?;
    let service = ScientistService::new(SqliteScientistRepository::try_new(&conn)?);

    let mut scientist = service.get_scientist(id)?.ok_or(ApiError::NotFound)?;
    if let Some(name) = payload.name {
        scientist.name = name;
    }
    if let Some(field) = payload.field {
        scientist.field = field;
    }
    scientist.touch();
    service.update_scientist(&scientist)?;

    Ok(Json(scientist))
}

/// `DELETE /scientists/:id` — cascades to experiments and results.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ScientistId>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    let service = ScientistService::new(SqliteScientistRepository::try_new(&conn)?);

    service.delete_scientist(id)?;
    info!("event=scientist_delete module=server status=ok id={id}");
    Ok(StatusCode::NO_CONTENT)
}
