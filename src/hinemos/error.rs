use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HinemosError {
    #[error("request failed: {message}")]
    Transport { message: String },
    #[error("HTTP {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },
    #[error("{message}")]
    Validation { message: String },
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
}

impl HinemosError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// A required per-kind parameter was not supplied, e.g. `url` for HTTP monitors.
    pub fn missing_parameter(name: &str, target: &str) -> Self {
        Self::validation(format!("'{name}' parameter is required for {target}"))
    }

    pub fn invalid_response(detail: impl std::fmt::Display) -> Self {
        Self::validation(format!("unexpected response payload: {detail}"))
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Builds an API error from a non-2xx response, preferring the body's `message` field.
    pub fn from_response(status: u16, text: &str) -> Self {
        let body = serde_json::from_str::<Value>(text).ok();
        let message = body
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| text.to_string());

        Self::Api {
            status,
            message,
            body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
