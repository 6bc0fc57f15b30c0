//! Expense entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::types::DbId;

/// An expense row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub name: String,
    pub amount: f64,
    pub budget_id: DbId,
    pub category: Option<String>,
}

/// DTO for creating a new expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub name: String,
    pub amount: f64,
    pub budget_id: DbId,
    pub category: Option<String>,
}

/// DTO for updating an existing expense. All fields are optional; absent
/// fields retain their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub budget_id: Option<DbId>,
    pub category: Option<String>,
}
