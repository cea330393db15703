//! Error taxonomy for calls against the articles REST API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400 / 422: malformed credentials or article
    #[error("request rejected ({status})")]
    Validation { status: u16, message: Option<String> },

    /// 401 / 403: token missing, expired or invalid (or bad credentials on login)
    #[error("authentication failed ({status})")]
    Authentication { status: u16, message: Option<String> },

    /// 404: the article no longer exists
    #[error("not found")]
    NotFound { message: Option<String> },

    /// No response at all
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-2xx status, or a 2xx body that could not be decoded
    #[error("unexpected response ({status})")]
    Unknown { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 | 422 => ApiError::Validation { status, message },
            401 | 403 => ApiError::Authentication { status, message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Unknown { status, message },
        }
    }

    pub fn network(cause: impl Into<String>) -> Self {
        ApiError::Network(cause.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. }
            | ApiError::Authentication { status, .. }
            | ApiError::Unknown { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Network(_) => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Validation { message, .. }
            | ApiError::Authentication { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Unknown { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Authentication { .. })
    }

    /// Text shown to the user: the server's own message when it sent one,
    /// otherwise the action-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}
