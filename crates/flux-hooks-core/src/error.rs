use thiserror::Error;

/// 请求体校验失败原因
///
/// Display 文本即返回给 webhook 调用方的错误信息。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing JSON body")]
    MalformedPayload,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid action. Must be one of [PUSH, PULL_REQUEST, MERGE]")]
    InvalidAction,
}

/// Flux Hooks 统一错误类型
#[derive(Error, Debug)]
pub enum HookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HookError>;

impl From<anyhow::Error> for HookError {
    fn from(err: anyhow::Error) -> Self {
        HookError::Internal(err.to_string())
    }
}
