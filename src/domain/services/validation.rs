use crate::error::AppError;

/// Present and not blank.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Present and strictly positive.
pub fn require_positive(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(AppError::Validation(format!("{} must be greater than 0", field))),
    }
}

pub fn require_non_negative(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(AppError::Validation(format!("{} cannot be negative", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// User ids start at 1; a missing or zero id is treated as absent.
pub fn require_user_id(value: Option<i64>) -> Result<i64, AppError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(AppError::Validation("usuario_id is required".to_string())),
    }
}

/// Category id 0 means "no category".
pub fn normalize_category_id(value: Option<i64>) -> Option<i64> {
    value.filter(|id| *id != 0)
}
