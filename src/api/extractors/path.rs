use axum::extract::FromRequestParts;
use crate::error::AppError;

/// `axum::extract::Path` whose rejections render as `{"error": ...}` with status 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
