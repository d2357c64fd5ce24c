use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateIncomeRequest, UpdateIncomeRequest},
    responses::DeletedResponse,
};
use crate::api::extractors::{json::ApiJson, path::ApiPath};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_incomes(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let incomes = state.income_service.list_by_user(user_id).await?;
    Ok(Json(incomes))
}

pub async fn create_income(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateIncomeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.income_service
        .create(payload.usuario_id, payload.descripcion, payload.monto)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_income(
    State(state): State<Arc<AppState>>,
    ApiPath(income_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateIncomeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.income_service.update(&income_id, payload.descripcion, payload.monto).await?;
    Ok(Json(updated))
}

pub async fn delete_income(
    State(state): State<Arc<AppState>>,
    ApiPath(income_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    state.income_service.delete(&income_id).await?;
    Ok(Json(DeletedResponse {
        message: "Income deleted".to_string(),
        id_eliminado: income_id,
    }))
}
