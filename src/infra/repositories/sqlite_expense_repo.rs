use crate::domain::{models::expense::Expense, ports::ExpenseRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const SELECT_WITH_CATEGORY: &str = "SELECT e.id, e.description, e.amount, e.spent_at, e.user_id, e.category_id, c.name AS category_name
     FROM expenses e
     LEFT JOIN categories c ON e.category_id = c.id";

pub struct SqliteExpenseRepo {
    pool: SqlitePool,
}

impl SqliteExpenseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for SqliteExpenseRepo {
    async fn create(&self, expense: &Expense) -> Result<Expense, AppError> {
        sqlx::query("INSERT INTO expenses (id, description, amount, spent_at, user_id, category_id) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(&expense.id)
            .bind(&expense.description)
            .bind(expense.amount)
            .bind(expense.spent_at)
            .bind(expense.user_id)
            .bind(expense.category_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.find_by_id(&expense.id).await?
            .ok_or_else(|| AppError::Internal(format!("expense {} vanished after insert", expense.id)))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Expense>, AppError> {
        sqlx::query_as::<_, Expense>(&format!("{} WHERE e.id = ?", SELECT_WITH_CATEGORY))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Expense>, AppError> {
        sqlx::query_as::<_, Expense>(&format!("{} WHERE e.user_id = ? ORDER BY e.spent_at DESC, e.id DESC", SELECT_WITH_CATEGORY))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, description: &str, amount: f64, category_id: Option<i64>) -> Result<Option<Expense>, AppError> {
        let result = sqlx::query("UPDATE expenses SET description = ?, amount = ?, category_id = ? WHERE id = ?")
            .bind(description)
            .bind(amount)
            .bind(category_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Expense not found".into()));
        }
        Ok(())
    }
}
