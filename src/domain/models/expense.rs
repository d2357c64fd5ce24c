use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use super::record_id::next_record_id;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "fecha")]
    pub spent_at: DateTime<Utc>,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<i64>,
    /// Filled from the categories join; absent on the bare table row.
    #[sqlx(default)]
    #[serde(rename = "categoria_nombre", default)]
    pub category_name: Option<String>,
}

impl Expense {
    pub fn new(user_id: i64, description: String, amount: f64, category_id: Option<i64>) -> Self {
        Self {
            id: next_record_id(),
            description,
            amount,
            spent_at: Utc::now(),
            user_id,
            category_id,
            category_name: None,
        }
    }
}
