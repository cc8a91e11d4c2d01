use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::hinemos::HinemosError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("unauthorized: {message}")]
    Unauthorized {
        code: &'static str,
        message: &'static str,
    },
    #[error("not found: {message}")]
    NotFound { code: &'static str, message: String },
    #[error("upstream error: {message}")]
    Upstream {
        code: &'static str,
        message: String,
        status: Option<u16>,
    },
    #[error("internal error")]
    Internal { code: &'static str, message: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub details: Value,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(code: &'static str, message: &'static str) -> Self {
        Self::Unauthorized { code, message }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { code, .. }
            | Self::Unauthorized { code, .. }
            | Self::NotFound { code, .. }
            | Self::Upstream { code, .. }
            | Self::Internal { code, .. } => code,
        }
    }

    /// Text suitable for a caller; internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest { message, .. }
            | Self::NotFound { message, .. }
            | Self::Upstream { message, .. } => message.clone(),
            Self::Unauthorized { message, .. } => message.to_string(),
            Self::Internal { .. } => "internal server error".to_string(),
        }
    }
}

impl From<HinemosError> for AppError {
    fn from(err: HinemosError) -> Self {
        match err {
            HinemosError::Validation { message } => Self::BadRequest {
                code: "invalid_argument",
                message,
            },
            HinemosError::NotFound { .. } => Self::NotFound {
                code: "not_found",
                message: err.to_string(),
            },
            HinemosError::Api { status, .. } => Self::Upstream {
                code: "hinemos_api_error",
                message: err.to_string(),
                status: Some(status),
            },
            HinemosError::Transport { .. } => Self::Upstream {
                code: "hinemos_unreachable",
                message: err.to_string(),
                status: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { message, .. } => {
                tracing::error!(error = %message, "request failed with internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let details = match &self {
            Self::Upstream {
                status: Some(upstream_status),
                ..
            } => json!({ "upstream_status": upstream_status }),
            _ => json!({}),
        };

        (
            status,
            Json(ErrorResponse {
                code: self.code().to_string(),
                message: self.public_message(),
                details,
            }),
        )
            .into_response()
    }
}
