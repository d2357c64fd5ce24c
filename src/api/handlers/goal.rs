use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CompletionFlag, ContributionRequest, CreateGoalRequest, UpdateGoalRequest},
    responses::DeletedResponse,
};
use crate::api::extractors::{json::ApiJson, path::ApiPath};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let goals = state.goal_service.list_by_user(user_id).await?;
    Ok(Json(goals))
}

pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateGoalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.goal_service
        .create(payload.usuario_id, payload.nombre, payload.monto_meta, payload.monto_actual, payload.fecha_limite)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    ApiPath(goal_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateGoalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.goal_service
        .update(
            &goal_id,
            payload.nombre,
            payload.monto_meta,
            payload.monto_actual,
            payload.fecha_limite,
            payload.completado.map(CompletionFlag::as_db_value),
        )
        .await?;
    Ok(Json(updated))
}

pub async fn contribute_to_goal(
    State(state): State<Arc<AppState>>,
    ApiPath(goal_id): ApiPath<String>,
    ApiJson(payload): ApiJson<ContributionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.goal_service.contribute(&goal_id, payload.monto).await?;
    Ok(Json(updated))
}

pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    ApiPath(goal_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    state.goal_service.delete(&goal_id).await?;
    Ok(Json(DeletedResponse {
        message: "Goal deleted".to_string(),
        id_eliminado: goal_id,
    }))
}
