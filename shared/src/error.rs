//! Errors from calls to the advisor api

use serde::Deserialize;
use thiserror::Error;

/// shown when the service gives no usable detail message
pub const FALLBACK_ERROR: &str = "An error occurred";

/// failure of a single api call.
///
/// the variants only matter for the console log; the user always sees
/// [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("service returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// error payload of a failed call, e.g. `{"detail": "drug name not recognized"}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// the detail message, if it is a non-empty string.
    ///
    /// validation errors carry a list in `detail`; those are not shown.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl ApiError {
    /// build a status error from a non-2xx response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message().map(str::to_string));
        Self::Status { status, detail }
    }

    /// the service-supplied detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// text displayed to the user
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(FALLBACK_ERROR).to_string()
    }
}
