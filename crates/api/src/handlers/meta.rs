//! Handlers for the root endpoint directory and favicon.

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

/// GET /
///
/// Static directory of the available endpoints. Documentation payload only;
/// touches no storage.
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Budget App!",
        "endpoints": {
            "POST /budget": "Add a new budget",
            "POST /expenses": "Add a new expense",
            "GET /expenses": "Retrieve all expenses",
            "PUT /budget/{id}": "Update a budget",
            "PUT /expense/{id}": "Update an expense",
            "DELETE /budget/{id}": "Delete a budget",
            "DELETE /expense/{id}": "Delete an expense",
            "POST /calculate-budget": "Sum expenses against a budget figure",
        }
    }))
}

/// GET /favicon.ico -- empty no-content response.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
