//! Stateless budget arithmetic.
//!
//! Backs the `/calculate-budget` endpoint: no persistence, no side effects,
//! just a sum and a subtraction over caller-supplied figures.

use serde::Serialize;

/// Result of weighing a list of expense amounts against a budget figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    /// The budget figure as supplied by the caller.
    pub budget: f64,
    /// Sum of all expense amounts.
    pub total_expenses: f64,
    /// `budget - total_expenses`. Negative when overspent.
    pub remaining: f64,
}

/// Sum `amounts` and subtract the total from `budget`.
pub fn summarize(budget: f64, amounts: &[f64]) -> BudgetSummary {
    let total_expenses: f64 = amounts.iter().sum();
    BudgetSummary {
        budget,
        total_expenses,
        remaining: budget - total_expenses,
    }
}
