pub mod category;
pub mod expense;
pub mod goal;
pub mod health;
pub mod income;
pub mod user;
