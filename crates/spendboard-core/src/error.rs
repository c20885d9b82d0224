//! Error types for spendboard-core
//!
//! Every variant's `Display` is the exact text shown to the user, so pages
//! can render `err.to_string()` without further mapping.

use thiserror::Error;

/// Failure of a single API operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    // ===================
    // Network
    // ===================
    #[error(
        "Cannot reach backend ({url}). Ensure the backend server is running (default http://127.0.0.1:8000) and that CORS allows this origin."
    )]
    Unreachable { url: String },

    #[error("Request failed: {message}")]
    Transport { message: String },

    // ===================
    // HTTP status
    // ===================
    #[error("{context}: {status}")]
    Status { context: &'static str, status: u16 },

    #[error("{message}")]
    Validation { message: String, status: u16 },

    // ===================
    // Response body
    // ===================
    /// Body was not JSON; the message is the raw body when there is one
    #[error("{}", not_json_message(.content_type, .body))]
    NotJson { content_type: String, body: String },

    #[error("Invalid JSON response: {message}")]
    InvalidJson { message: String, body: String },

    // ===================
    // Local input
    // ===================
    #[error("Invalid {field}: '{value}'")]
    InvalidDraft { field: &'static str, value: String },
}

fn not_json_message(content_type: &str, body: &str) -> String {
    if body.is_empty() {
        format!("Expected JSON, got {}", content_type)
    } else {
        body.to_string()
    }
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Validation { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response text attached to body errors
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            ApiError::NotJson { body, .. } | ApiError::InvalidJson { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable { .. })
    }
}

/// Failure reported by a [`Transport`](crate::http::Transport) before any
/// response was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The backend could not be reached at all (refused, DNS, offline, CORS)
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Invalid client configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: &'static str },

    #[error("Invalid timeout '{value}': expected a positive number of seconds")]
    InvalidTimeout { value: String },
}
