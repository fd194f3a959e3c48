//! Liveness probe.

use axum::http::StatusCode;

/// `GET /up` — returns 200 while the process is serving requests.
pub async fn show() -> StatusCode {
    StatusCode::OK
}
