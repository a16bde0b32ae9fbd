use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flux_hooks_core::{HookError, ValidationError};
use serde_json::json;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 请求体校验失败
    BadRequest(String),
    /// 存储或内部错误
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<HookError> for ApiError {
    fn from(err: HookError) -> Self {
        match err {
            HookError::Validation(e) => e.into(),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
