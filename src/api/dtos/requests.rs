use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Every field is optional on the wire so that missing input reaches the
// services and comes back as a 400 with a field-specific message.

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CredentialsRequest {
    pub nombre_usuario: Option<String>,
    pub contrasena: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateCategoryRequest {
    pub nombre: Option<String>,
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateCategoryRequest {
    pub nombre: Option<String>,
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateExpenseRequest {
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub usuario_id: Option<i64>,
    pub categoria_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateExpenseRequest {
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub categoria_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateIncomeRequest {
    pub usuario_id: Option<i64>,
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateIncomeRequest {
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateGoalRequest {
    pub usuario_id: Option<i64>,
    pub nombre: Option<String>,
    pub monto_meta: Option<f64>,
    pub monto_actual: Option<f64>,
    pub fecha_limite: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateGoalRequest {
    pub nombre: Option<String>,
    pub monto_meta: Option<f64>,
    pub monto_actual: Option<f64>,
    pub fecha_limite: Option<NaiveDate>,
    pub completado: Option<CompletionFlag>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContributionRequest {
    pub monto: Option<f64>,
}

/// `completado` arrives as `0`/`1` from some clients and as a boolean from others.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CompletionFlag {
    Bool(bool),
    Int(i64),
}

impl CompletionFlag {
    pub fn as_db_value(self) -> i32 {
        match self {
            CompletionFlag::Bool(done) => i32::from(done),
            CompletionFlag::Int(n) => i32::from(n != 0),
        }
    }
}
