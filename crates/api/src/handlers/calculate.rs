//! Handler for the stateless `/calculate-budget` endpoint.

use axum::Json;
use serde::Deserialize;
use tally_core::calc::{summarize, BudgetSummary};

use crate::error::AppResult;

/// Request body for `/calculate-budget`.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub budget: f64,
    pub expenses: Vec<ExpenseLine>,
}

/// A single expense entry. Only `amount` is read; extra keys are ignored.
#[derive(Debug, Deserialize)]
pub struct ExpenseLine {
    pub amount: f64,
}

/// POST /calculate-budget
///
/// Pure computation; touches no storage.
pub async fn calculate(Json(input): Json<CalculateRequest>) -> AppResult<Json<BudgetSummary>> {
    let amounts: Vec<f64> = input.expenses.iter().map(|e| e.amount).collect();
    Ok(Json(summarize(input.budget, &amounts)))
}
