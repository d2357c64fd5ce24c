use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{category, expense, goal, health, income, user};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Users
        .route("/usuarios", post(user::register).get(user::list_users))
        .route("/login", post(user::login))

        // Expenses
        .route("/gastos", post(expense::create_expense))
        .route("/gastos/usuario/{usuario_id}", get(expense::list_expenses))
        .route("/gastos/{id}", put(expense::update_expense).delete(expense::delete_expense))

        // Incomes
        .route("/ingresos", post(income::create_income))
        .route("/ingresos/usuario/{usuario_id}", get(income::list_incomes))
        .route("/ingresos/{id}", put(income::update_income).delete(income::delete_income))

        // Goals
        .route("/objetivos", post(goal::create_goal))
        .route("/objetivos/usuario/{usuario_id}", get(goal::list_goals))
        .route("/objetivos/{id}", put(goal::update_goal).delete(goal::delete_goal))
        .route("/objetivos/{id}/aportes", post(goal::contribute_to_goal))

        // Categories
        .route("/categorias", post(category::create_category))
        .route("/categorias/usuario/{usuario_id}", get(category::list_categories))
        .route("/categorias/{id}", put(category::update_category).delete(category::delete_category))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
