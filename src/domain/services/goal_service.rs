use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;
use crate::domain::{
    models::goal::{Goal, GoalChanges},
    ports::GoalRepository,
    services::validation::{require_non_negative, require_positive, require_text, require_user_id},
};
use crate::error::AppError;

pub struct GoalService {
    repo: Arc<dyn GoalRepository>,
}

impl GoalService {
    pub fn new(repo: Arc<dyn GoalRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        user_id: Option<i64>,
        name: Option<String>,
        target_amount: Option<f64>,
        current_amount: Option<f64>,
        deadline: Option<NaiveDate>,
    ) -> Result<Goal, AppError> {
        let user_id = require_user_id(user_id)?;
        let name = require_text(name, "nombre")?;
        let target_amount = require_positive(target_amount, "monto_meta")?;
        let current_amount = require_non_negative(Some(current_amount.unwrap_or(0.0)), "monto_actual")?;

        let created = self.repo.create(&Goal::new(user_id, name, target_amount, current_amount, deadline)).await?;

        info!("Created goal {} ('{}') for user {}", created.id, created.name, user_id);
        Ok(created)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Goal>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    /// `completed` is stored as given; it is never inferred from the amounts.
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        target_amount: Option<f64>,
        current_amount: Option<f64>,
        deadline: Option<NaiveDate>,
        completed: Option<i32>,
    ) -> Result<Goal, AppError> {
        let changes = GoalChanges {
            name: require_text(name, "nombre")?,
            target_amount: require_positive(target_amount, "monto_meta")?,
            current_amount: require_non_negative(current_amount, "monto_actual")?,
            deadline,
            completed,
        };

        let updated = self.repo.update(id, &changes).await?
            .ok_or_else(|| AppError::NotFound("Goal not found".into()))?;

        info!("Updated goal {}", id);
        Ok(updated)
    }

    /// Adds to `monto_actual` in one statement, so concurrent contributions are never lost.
    pub async fn contribute(&self, id: &str, amount: Option<f64>) -> Result<Goal, AppError> {
        let amount = require_positive(amount, "monto")?;

        let updated = self.repo.add_contribution(id, amount).await?
            .ok_or_else(|| AppError::NotFound("Goal not found".into()))?;

        info!("Added {} to goal {} (now {})", amount, id, updated.current_amount);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        info!("Deleted goal {}", id);
        Ok(())
    }
}
