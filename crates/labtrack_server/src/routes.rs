//! Route table with shallow nesting.
//!
//! Children are listed/created under their parent and addressed directly
//! by their own id for show/update/destroy.

use crate::handlers::{experiments, health, results, scientists};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

/// Builds the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/up", get(health::show))
        .route(
            "/scientists",
            get(scientists::index).post(scientists::create),
        )
        // Param names must agree per position for the router; handlers
        // extract the single value positionally.
        .route(
            "/scientists/:scientist_id",
            get(scientists::show)
                .patch(scientists::update)
                .delete(scientists::destroy),
        )
        .route(
            "/scientists/:scientist_id/experiments",
            get(experiments::index).post(experiments::create),
        )
        .route(
            "/experiments/:experiment_id",
            get(experiments::show)
                .patch(experiments::update)
                .delete(experiments::destroy),
        )
        .route(
            "/experiments/:experiment_id/results",
            get(results::index).post(results::create),
        )
        .route(
            "/results/:id",
            get(results::show)
                .patch(results::update)
                .delete(results::destroy),
        )
        .with_state(state)
}
