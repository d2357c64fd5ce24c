use std::sync::Arc;
use tracing::info;
use crate::domain::{
    models::category::Category,
    ports::CategoryRepository,
    services::validation::{require_text, require_user_id},
};
use crate::error::AppError;

const DUPLICATE_CATEGORY: &str = "A category with that name already exists for this user";

pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, name: Option<String>, user_id: Option<i64>) -> Result<Category, AppError> {
        let name = require_text(name, "nombre")?;
        let user_id = require_user_id(user_id)?;

        let created = self.repo.create(user_id, &name).await
            .map_err(|e| e.conflict_on_duplicate(DUPLICATE_CATEGORY))?;

        info!("Created category {} ({}) for user {}", created.id, created.name, user_id);
        Ok(created)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Category>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    /// Renames a category only when `user_id` owns it.
    pub async fn update(&self, id: i64, name: Option<String>, user_id: Option<i64>) -> Result<Category, AppError> {
        let name = require_text(name, "nombre")?;
        let user_id = require_user_id(user_id)?;

        let updated = self.repo.update(id, user_id, &name).await
            .map_err(|e| e.conflict_on_duplicate(DUPLICATE_CATEGORY))?
            .ok_or_else(|| AppError::NotFound("Category not found or not owned by this user".into()))?;

        info!("Renamed category {} to '{}'", id, updated.name);
        Ok(updated)
    }

    /// Deletes by id without an ownership check. Expenses that used the
    /// category keep existing with their category cleared by the store.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        info!("Deleted category {}", id);
        Ok(())
    }
}
