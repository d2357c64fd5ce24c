use std::sync::Arc;
use tracing::info;
use crate::domain::{
    models::income::Income,
    ports::IncomeRepository,
    services::validation::{require_positive, require_text, require_user_id},
};
use crate::error::AppError;

pub struct IncomeService {
    repo: Arc<dyn IncomeRepository>,
}

impl IncomeService {
    pub fn new(repo: Arc<dyn IncomeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, user_id: Option<i64>, description: Option<String>, amount: Option<f64>) -> Result<Income, AppError> {
        let user_id = require_user_id(user_id)?;
        let description = require_text(description, "descripcion")?;
        let amount = require_positive(amount, "monto")?;

        let created = self.repo.create(&Income::new(user_id, description, amount)).await?;

        info!("Created income {} for user {}", created.id, user_id);
        Ok(created)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Income>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn update(&self, id: &str, description: Option<String>, amount: Option<f64>) -> Result<Income, AppError> {
        let description = require_text(description, "descripcion")?;
        let amount = require_positive(amount, "monto")?;

        let updated = self.repo.update(id, &description, amount).await?
            .ok_or_else(|| AppError::NotFound("Income not found".into()))?;

        info!("Updated income {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        info!("Deleted income {}", id);
        Ok(())
    }
}
