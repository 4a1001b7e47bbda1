use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide failure taxonomy. Every variant carries a machine
/// readable code (`entity/condition`) and a human readable message, so the
/// transport layer can map responses without inspecting message text.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("{message}")]
    Validation { code: &'static str, message: String },

    #[error("{message}")]
    Conflict { code: &'static str, message: String },

    #[error("{message}")]
    Unauthenticated { code: &'static str, message: String },

    #[error("{message}")]
    Internal { code: &'static str, message: String },
}

impl AppError {
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        AppError::NotFound { code, message: message.into() }
    }

    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation { code, message: message.into() }
    }

    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Conflict { code, message: message.into() }
    }

    pub fn unauthenticated(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Unauthenticated { code, message: message.into() }
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Internal { code, message: message.into() }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { code, .. }
            | AppError::Validation { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Unauthenticated { code, .. }
            | AppError::Internal { code, .. } => code,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Internal failures keep their detail in the logs only.
        let message = match &self {
            AppError::Internal { message, .. } => {
                tracing::error!("Error: {}: {}", status, message);
                "Internal server error".to_string()
            }
            other => {
                tracing::error!("Error: {}: {}", status, other);
                other.to_string()
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal {
            code: "internal/database",
            message: err.to_string(),
        }
    }
}
