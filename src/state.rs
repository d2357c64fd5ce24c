use std::sync::Arc;
use crate::domain::services::{
    category_service::CategoryService, expense_service::ExpenseService, goal_service::GoalService,
    income_service::IncomeService, user_service::UserService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_service: Arc<UserService>,
    pub category_service: Arc<CategoryService>,
    pub expense_service: Arc<ExpenseService>,
    pub income_service: Arc<IncomeService>,
    pub goal_service: Arc<GoalService>,
}
