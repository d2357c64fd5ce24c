use std::sync::Arc;
use tracing::info;
use crate::domain::{
    models::expense::Expense,
    ports::ExpenseRepository,
    services::validation::{normalize_category_id, require_positive, require_text, require_user_id},
};
use crate::error::AppError;

pub struct ExpenseService {
    repo: Arc<dyn ExpenseRepository>,
}

impl ExpenseService {
    pub fn new(repo: Arc<dyn ExpenseRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        user_id: Option<i64>,
        description: Option<String>,
        amount: Option<f64>,
        category_id: Option<i64>,
    ) -> Result<Expense, AppError> {
        let user_id = require_user_id(user_id)?;
        let description = require_text(description, "descripcion")?;
        let amount = require_positive(amount, "monto")?;

        let expense = Expense::new(user_id, description, amount, normalize_category_id(category_id));
        let created = self.repo.create(&expense).await?;

        info!("Created expense {} ({}) for user {}", created.id, created.amount, user_id);
        Ok(created)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Expense>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn update(
        &self,
        id: &str,
        description: Option<String>,
        amount: Option<f64>,
        category_id: Option<i64>,
    ) -> Result<Expense, AppError> {
        let description = require_text(description, "descripcion")?;
        let amount = require_positive(amount, "monto")?;

        let updated = self.repo.update(id, &description, amount, normalize_category_id(category_id)).await?
            .ok_or_else(|| AppError::NotFound("Expense not found".into()))?;

        info!("Updated expense {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        info!("Deleted expense {}", id);
        Ok(())
    }
}
