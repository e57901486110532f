use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so JSON handlers can return `Result<T, AppError>`.
/// Page handlers render `user_message()` inside the form instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed plan: {0}")]
    MalformedPlan(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedPlan(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => "MISSING_API_KEY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::MalformedPlan(_) => "MALFORMED_PLAN",
        }
    }

    /// Message safe to show on the page. Upstream details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingApiKey => "APIキーが設定されていません。".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Llm(_) | AppError::MalformedPlan(_) => {
                "エラーが発生しました。時間をおいてもう一度お試しください。".to_string()
            }
        }
    }

    /// Logs server-side failures. Validation errors are the user's, not ours.
    pub fn log(&self) {
        match self {
            AppError::MissingApiKey => tracing::error!("GOOGLE_API_KEY is not configured"),
            AppError::Validation(_) => {}
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::MalformedPlan(msg) => tracing::error!("Malformed plan: {msg}"),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            LlmError::Parse(e) => AppError::MalformedPlan(e.to_string()),
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status_code(), body).into_response()
    }
}
