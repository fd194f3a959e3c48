//! HTTP surface for LabTrack.
//!
//! # Responsibility
//! - Map the REST route table onto core services.
//! - Translate repository errors into API status codes.
//!
//! # Invariants
//! - Handlers resolve parent records explicitly; no implicit request state.
//! - Business invariants live in `labtrack_core`, never here.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::app;
pub use state::AppState;
