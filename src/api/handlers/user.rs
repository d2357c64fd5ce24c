use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::{dtos::requests::CredentialsRequest, extractors::json::ApiJson};
use crate::error::AppError;
use std::sync::Arc;

pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.register(payload.nombre_usuario, payload.contrasena).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let identity = state.user_service.login(payload.nombre_usuario, payload.contrasena).await?;
    Ok(Json(identity))
}
