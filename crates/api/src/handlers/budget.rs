//! Handlers for the `/budget` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tally_core::error::CoreError;
use tally_core::types::DbId;
use tally_db::models::budget::{Budget, CreateBudget, UpdateBudget};
use tally_db::repositories::{BudgetRepo, ExpenseRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /budget
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBudget>,
) -> AppResult<(StatusCode, Json<Budget>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    let budget = BudgetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

/// PUT /budget/{id}
///
/// Partial update: absent fields retain their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBudget>,
) -> AppResult<Json<Budget>> {
    if matches!(&input.name, Some(name) if name.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    let budget = BudgetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))?;
    Ok(Json(budget))
}

/// DELETE /budget/{id}
///
/// Rejected with 409 while dependent expenses still reference the budget.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let dependents = ExpenseRepo::count_by_budget(&state.pool, id).await?;
    if dependents > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "budget {id} still has {dependents} expense(s); delete them first"
        ))));
    }

    let deleted = BudgetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({ "message": "Budget deleted" })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))
    }
}
