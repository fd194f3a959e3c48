//! API error taxonomy and status-code mapping.
//!
//! # Invariants
//! - Validation failures surface as 422 with `{"errors": [...]}` bodies.
//! - Missing records surface as 404 with an empty body.
//! - Everything else is logged and returned as an opaque 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use labtrack_core::{RepoError, ValidationErrors};
use log::error;
use serde::Serialize;

/// Request-level error returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(ValidationErrors),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorsBody {
                    errors: errors.messages().to_vec(),
                }),
            )
                .into_response(),
            Self::Internal(message) => {
                error!("event=request_failed module=server status=error error={message}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(errors) => Self::Validation(errors),
            RepoError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}
