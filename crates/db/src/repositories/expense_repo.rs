//! Repository for the `expenses` table.

use tally_core::types::DbId;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, amount, budget_id, category";

/// Provides CRUD operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (name, amount, budget_id, category)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.budget_id)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find an expense by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = ?");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all expenses in insertion (id) order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses ORDER BY id");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// Count expenses attached to the given budget.
    pub async fn count_by_budget(pool: &DbPool, budget_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM expenses WHERE budget_id = ?")
                .bind(budget_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update an expense. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                name = COALESCE(?, name),
                amount = COALESCE(?, amount),
                budget_id = COALESCE(?, budget_id),
                category = COALESCE(?, category)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.budget_id)
            .bind(&input.category)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
