use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use sqlx::FromRow;
use super::record_id::next_record_id;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "monto_meta")]
    pub target_amount: f64,
    #[serde(rename = "monto_actual")]
    pub current_amount: f64,
    #[serde(rename = "fecha_limite")]
    pub deadline: Option<NaiveDate>,
    /// 0 or 1, set by the caller. Not derived from the amounts.
    #[serde(rename = "completado")]
    pub completed: i32,
}

impl Goal {
    pub fn new(user_id: i64, name: String, target_amount: f64, current_amount: f64, deadline: Option<NaiveDate>) -> Self {
        Self {
            id: next_record_id(),
            user_id,
            name,
            target_amount,
            current_amount,
            deadline,
            completed: 0,
        }
    }
}

/// Full replacement of a goal's editable fields. `completed: None` keeps the stored flag.
#[derive(Debug, Clone)]
pub struct GoalChanges {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub completed: Option<i32>,
}
