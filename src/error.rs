use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 接口层错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("upstream returned an unreadable payload: {0}")]
    UpstreamPayload(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamTransport(_)
            | AppError::UpstreamStatus(_)
            | AppError::UpstreamPayload(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::UpstreamTransport(_) => "UPSTREAM_UNREACHABLE",
            AppError::UpstreamStatus(_) => "UPSTREAM_STATUS",
            AppError::UpstreamPayload(_) => "UPSTREAM_PAYLOAD",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Export(_) => "EXPORT_FAILED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::BAD_GATEWAY {
            tracing::warn!("Upstream failure: {}", self);
        }

        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
