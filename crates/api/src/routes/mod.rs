pub mod budget;
pub mod expense;
pub mod health;
pub mod meta;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET    /                      endpoint directory
/// GET    /favicon.ico           empty no-content
/// GET    /health                service + database health
///
/// POST   /budget                create budget
/// PUT    /budget/{id}           partial-update budget
/// DELETE /budget/{id}           delete budget (409 while expenses remain)
///
/// POST   /expenses              create expense
/// GET    /expenses              list all expenses
/// PUT    /expense/{id}          partial-update expense
/// DELETE /expense/{id}          delete expense
///
/// POST   /calculate-budget      stateless budget arithmetic
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(meta::router())
        .merge(health::router())
        .merge(budget::router())
        .merge(expense::router())
        .route("/calculate-budget", post(handlers::calculate::calculate))
}
