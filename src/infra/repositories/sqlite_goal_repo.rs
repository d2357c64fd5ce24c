use crate::domain::{models::goal::{Goal, GoalChanges}, ports::GoalRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

// Amounts are cast on read so rows written with text values still decode as floats (0 when unparsable).
const GOAL_COLUMNS: &str = "id, user_id, name,
        COALESCE(CAST(target_amount AS REAL), 0.0) AS target_amount,
        COALESCE(CAST(current_amount AS REAL), 0.0) AS current_amount,
        deadline, completed";

pub struct SqliteGoalRepo {
    pool: SqlitePool,
}

impl SqliteGoalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for SqliteGoalRepo {
    async fn create(&self, goal: &Goal) -> Result<Goal, AppError> {
        sqlx::query_as::<_, Goal>(&format!(
            "INSERT INTO goals (id, user_id, name, target_amount, current_amount, deadline, completed) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            GOAL_COLUMNS
        ))
            .bind(&goal.id)
            .bind(goal.user_id)
            .bind(&goal.name)
            .bind(goal.target_amount)
            .bind(goal.current_amount)
            .bind(goal.deadline)
            .bind(goal.completed)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(&format!("SELECT {} FROM goals WHERE id = ?", GOAL_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(&format!("SELECT {} FROM goals WHERE user_id = ? ORDER BY id DESC", GOAL_COLUMNS))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, changes: &GoalChanges) -> Result<Option<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(&format!(
            "UPDATE goals SET name = ?, target_amount = ?, current_amount = ?, deadline = ?, completed = COALESCE(?, completed)
             WHERE id = ?
             RETURNING {}",
            GOAL_COLUMNS
        ))
            .bind(&changes.name)
            .bind(changes.target_amount)
            .bind(changes.current_amount)
            .bind(changes.deadline)
            .bind(changes.completed)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn add_contribution(&self, id: &str, amount: f64) -> Result<Option<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(&format!(
            "UPDATE goals SET current_amount = current_amount + ? WHERE id = ? RETURNING {}",
            GOAL_COLUMNS
        ))
            .bind(amount)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Goal not found".into()));
        }
        Ok(())
    }
}
