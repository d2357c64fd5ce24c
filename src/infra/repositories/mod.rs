pub mod sqlite_category_repo;
pub mod sqlite_expense_repo;
pub mod sqlite_goal_repo;
pub mod sqlite_income_repo;
pub mod sqlite_user_repo;

pub mod postgres_category_repo;
pub mod postgres_expense_repo;
pub mod postgres_goal_repo;
pub mod postgres_income_repo;
pub mod postgres_user_repo;
