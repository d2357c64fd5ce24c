use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
    responses::DeletedResponse,
};
use crate::api::extractors::{json::ApiJson, path::ApiPath};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_service.list_by_user(user_id).await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.category_service.create(payload.nombre, payload.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.category_service.update(category_id, payload.nombre, payload.usuario_id).await?;
    Ok(Json(updated))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.category_service.delete(category_id).await?;
    Ok(Json(DeletedResponse {
        message: "Category deleted".to_string(),
        id_eliminado: category_id.to_string(),
    }))
}
