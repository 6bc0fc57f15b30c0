//! Route definitions for the expense resource.
//!
//! The collection lives at `/expenses`; single-record mutations use the
//! singular `/expense/{id}` paths.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::expense;
use crate::state::AppState;

/// Expense routes.
///
/// ```text
/// POST   /expenses        -> create
/// GET    /expenses        -> list
/// PUT    /expense/{id}    -> update
/// DELETE /expense/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(expense::list).post(expense::create))
        .route(
            "/expense/{id}",
            put(expense::update).delete(expense::delete),
        )
}
