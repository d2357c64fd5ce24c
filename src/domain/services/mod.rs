pub mod category_service;
pub mod defaults;
pub mod expense_service;
pub mod goal_service;
pub mod income_service;
pub mod password;
pub mod user_service;
pub mod validation;
