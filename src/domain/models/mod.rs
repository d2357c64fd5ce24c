pub mod category;
pub mod expense;
pub mod goal;
pub mod income;
pub mod record_id;
pub mod user;
