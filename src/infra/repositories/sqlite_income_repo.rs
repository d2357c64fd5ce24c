use crate::domain::{models::income::Income, ports::IncomeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteIncomeRepo {
    pool: SqlitePool,
}

impl SqliteIncomeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IncomeRepository for SqliteIncomeRepo {
    async fn create(&self, income: &Income) -> Result<Income, AppError> {
        sqlx::query_as::<_, Income>(
            "INSERT INTO incomes (id, user_id, description, amount, received_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&income.id)
            .bind(income.user_id)
            .bind(&income.description)
            .bind(income.amount)
            .bind(income.received_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Income>, AppError> {
        sqlx::query_as::<_, Income>(
            "SELECT * FROM incomes WHERE user_id = ? ORDER BY received_at DESC, id DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, description: &str, amount: f64) -> Result<Option<Income>, AppError> {
        sqlx::query_as::<_, Income>(
            "UPDATE incomes SET description = ?, amount = ? WHERE id = ? RETURNING *"
        )
            .bind(description)
            .bind(amount)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Income not found".into()));
        }
        Ok(())
    }
}
