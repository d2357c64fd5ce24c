use crate::domain::models::{
    category::Category, expense::Expense, goal::{Goal, GoalChanges}, income::Income, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, username: &str, password_hash: &str, created_at: DateTime<Utc>) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, user_id: i64, name: &str) -> Result<Category, AppError>;
    /// Inserts all names in one statement and returns how many rows were written.
    async fn create_many(&self, user_id: i64, names: &[&str]) -> Result<u64, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Category>, AppError>;
    async fn update(&self, id: i64, user_id: i64, name: &str) -> Result<Option<Category>, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(&self, expense: &Expense) -> Result<Expense, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Expense>, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Expense>, AppError>;
    async fn update(&self, id: &str, description: &str, amount: f64, category_id: Option<i64>) -> Result<Option<Expense>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait IncomeRepository: Send + Sync {
    async fn create(&self, income: &Income) -> Result<Income, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Income>, AppError>;
    async fn update(&self, id: &str, description: &str, amount: f64) -> Result<Option<Income>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn create(&self, goal: &Goal) -> Result<Goal, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Goal>, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Goal>, AppError>;
    async fn update(&self, id: &str, changes: &GoalChanges) -> Result<Option<Goal>, AppError>;
    /// Single-statement `current_amount += amount`.
    async fn add_contribution(&self, id: &str, amount: f64) -> Result<Option<Goal>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
