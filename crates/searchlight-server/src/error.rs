use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use searchlight_core::SearchlightError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad caller input. Rendered as 400 with `code`.
    #[error("{message}")]
    Validation { code: &'static str, message: String },

    /// A GSC/GA4 fetch (or the scoreboard built on one) failed. Rendered as 500.
    #[error("{source}")]
    Provider {
        code: &'static str,
        #[source]
        source: SearchlightError,
    },

    #[error("Route {0} not found")]
    NotFound(String),
}

impl AppError {
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            code,
            message: message.into(),
        }
    }

    /// Adapter for `map_err` that tags a failure with the endpoint's code.
    pub fn provider<E: Into<SearchlightError>>(code: &'static str) -> impl FnOnce(E) -> Self {
        move |e| AppError::Provider {
            code,
            source: e.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } | AppError::Provider { code, .. } => *code,
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Provider { code, source } => {
                tracing::error!("{} failed: {}", code, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
