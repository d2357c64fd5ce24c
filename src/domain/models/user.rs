use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(rename = "fecha_registro")]
    pub created_at: DateTime<Utc>,
}

/// Identity handed back by a successful login. There is no session behind it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserIdentity {
    pub id: i64,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
}

impl From<&User> for UserIdentity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
