//! Handlers for the `/expenses` and `/expense/{id}` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tally_core::error::CoreError;
use tally_core::types::DbId;
use tally_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use tally_db::repositories::{BudgetRepo, ExpenseRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Ensure the referenced budget exists before attaching an expense to it.
async fn ensure_budget_exists(state: &AppState, budget_id: DbId) -> AppResult<()> {
    if BudgetRepo::find_by_id(&state.pool, budget_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "budget_id {budget_id} does not reference an existing budget"
        ))));
    }
    Ok(())
}

/// POST /expenses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    ensure_budget_exists(&state, input.budget_id).await?;

    let expense = ExpenseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let expenses = ExpenseRepo::list(&state.pool).await?;
    Ok(Json(expenses))
}

/// PUT /expense/{id}
///
/// Partial update: absent fields retain their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<Json<Expense>> {
    if matches!(&input.name, Some(name) if name.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".into(),
        )));
    }
    if let Some(budget_id) = input.budget_id {
        ensure_budget_exists(&state, budget_id).await?;
    }

    let expense = ExpenseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;
    Ok(Json(expense))
}

/// DELETE /expense/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ExpenseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({ "message": "Expense deleted" })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))
    }
}
