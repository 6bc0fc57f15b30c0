//! Root-level documentation routes: `/` and `/favicon.ico`.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::home))
        .route("/favicon.ico", get(meta::favicon))
}
