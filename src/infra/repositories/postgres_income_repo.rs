use crate::domain::{models::income::Income, ports::IncomeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresIncomeRepo {
    pool: PgPool,
}

impl PostgresIncomeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IncomeRepository for PostgresIncomeRepo {
    async fn create(&self, income: &Income) -> Result<Income, AppError> {
        sqlx::query_as::<_, Income>(
            "INSERT INTO incomes (id, user_id, description, amount, received_at) VALUES ($1, $2, $3, $4, $5) RETURNING *"
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
            "SELECT * FROM incomes WHERE user_id = $1 ORDER BY received_at DESC, id DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, description: &str, amount: f64) -> Result<Option<Income>, AppError> {
        sqlx::query_as::<_, Income>(
            "UPDATE incomes SET description = $1, amount = $2 WHERE id = $3 RETURNING *"
        )
            .bind(description)
            .bind(amount)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = $1")
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
