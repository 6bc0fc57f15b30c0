//! Budget entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::types::DbId;

/// A budget row from the `budgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub name: String,
    pub amount: f64,
}

/// DTO for creating a new budget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    pub name: String,
    pub amount: f64,
}

/// DTO for updating an existing budget. All fields are optional; absent
/// fields retain their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudget {
    pub name: Option<String>,
    pub amount: Option<f64>,
}
