// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::ledger::LedgerError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    /// Malformed client input.
    #[error("{0}")]
    BadRequest(String),

    /// Process configuration that is unusable for this request (e.g. a non-numeric pool name).
    #[error("{0}")]
    Config(String),

    #[error("failed to process pin request: {0}")]
    Upstream(#[from] LedgerError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) | Self::Config(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Pinning Service API `Failure.error.reason`.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BadRequest(_) | Self::Config(_) => "BAD_REQUEST",
            Self::Upstream(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Unauthorized => (status, "Unauthorized").into_response(),
            Self::Upstream(ref e) => {
                error!(status = ?e.status(), error = %e, "ledger interaction failed");
                failure(status, self.reason(), self.to_string())
            }
            _ => failure(status, self.reason(), self.to_string()),
        }
    }
}

fn failure(status: StatusCode, reason: &str, details: String) -> Response {
    let body = json!({ "error": { "reason": reason, "details": details } });
    (status, Json(body)).into_response()
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
