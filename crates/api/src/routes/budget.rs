//! Route definitions for the `/budget` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::budget;
use crate::state::AppState;

/// Routes mounted at `/budget`.
///
/// ```text
/// POST   /budget          -> create
/// PUT    /budget/{id}     -> update
/// DELETE /budget/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/budget", post(budget::create))
        .route("/budget/{id}", put(budget::update).delete(budget::delete))
}
