use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use super::record_id::next_record_id;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Income {
    pub id: String,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "fecha")]
    pub received_at: DateTime<Utc>,
}

impl Income {
    pub fn new(user_id: i64, description: String, amount: f64) -> Self {
        Self {
            id: next_record_id(),
            user_id,
            description,
            amount,
            received_at: Utc::now(),
        }
    }
}
