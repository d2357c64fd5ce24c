use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateExpenseRequest, UpdateExpenseRequest},
    responses::ExpenseDeletedResponse,
};
use crate::api::extractors::{json::ApiJson, path::ApiPath};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let expenses = state.expense_service.list_by_user(user_id).await?;
    Ok(Json(expenses))
}

pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateExpenseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.expense_service
        .create(payload.usuario_id, payload.descripcion, payload.monto, payload.categoria_id)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    ApiPath(expense_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateExpenseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.expense_service
        .update(&expense_id, payload.descripcion, payload.monto, payload.categoria_id)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    ApiPath(expense_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    state.expense_service.delete(&expense_id).await?;
    Ok(Json(ExpenseDeletedResponse {
        message: "Expense deleted".to_string(),
        id_borrado: expense_id,
    }))
}
