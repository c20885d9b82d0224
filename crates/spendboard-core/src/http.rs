//! Transport-neutral request/response values and response interpretation
//!
//! The client builds [`ApiRequest`]s and interprets [`ApiResponse`]s; moving
//! bytes is left to a [`Transport`] (gloo-net in the browser, reqwest
//! natively, an in-memory fake in tests).

use crate::error::{ApiError, TransportError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Headers attached to every request
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON text for POST/PATCH
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_json(method: Method, url: impl Into<String>, body: String) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    /// JSON response with the given status
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }

    /// Decode the body after checking the content type.
    ///
    /// Non-JSON bodies fail with the raw text as the message; JSON that does
    /// not match `T` fails with the raw text attached.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_json() {
            return Err(ApiError::NotJson {
                content_type: self.content_type.clone().unwrap_or_default(),
                body: self.body.clone(),
            });
        }

        serde_json::from_str(&self.body).map_err(|e| ApiError::InvalidJson {
            message: e.to_string(),
            body: self.body.clone(),
        })
    }

    /// Turn a non-2xx status into a status-coded error
    pub fn ensure_success(&self, context: &'static str) -> Result<(), ApiError> {
        if self.ok() {
            Ok(())
        } else {
            Err(ApiError::Status {
                context,
                status: self.status,
            })
        }
    }

    /// Message for a failed create: `detail`, else the `amount` errors, else
    /// the first other field's errors, else a status-coded fallback.
    pub fn validation_message(&self) -> String {
        let fallback = || format!("Create failed ({})", self.status);

        let Ok(Value::Object(fields)) = self.decode::<Value>() else {
            return fallback();
        };

        if let Some(detail) = fields.get("detail").and_then(Value::as_str) {
            if !detail.is_empty() {
                return detail.to_string();
            }
        }

        if let Some(messages) = fields.get("amount").and_then(join_messages) {
            return messages;
        }

        fields
            .iter()
            .filter(|(name, _)| name.as_str() != "detail" && name.as_str() != "amount")
            .find_map(|(name, value)| join_messages(value).map(|m| format!("{}: {}", name, m)))
            .unwrap_or_else(fallback)
    }
}

/// `["a", "b"]` → `"a, b"`; a bare string is taken as-is
fn join_messages(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}

/// Whether a browser fetch error message means the backend was unreachable.
///
/// Chromium reports `Failed to fetch`, Firefox `NetworkError when attempting
/// to fetch resource.`, WebKit `Load failed`.
pub fn is_network_failure_message(message: &str) -> bool {
    message == "Failed to fetch" || message.contains("NetworkError") || message == "Load failed"
}

/// Moves one request to the backend and returns whatever it answered.
///
/// Implementations must not interpret the status code; non-2xx responses are
/// returned as `Ok`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        ok: bool,
    }

    #[test]
    fn test_decode_checks_content_type() {
        let html = ApiResponse {
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: "<!doctype html>".to_string(),
        };
        let err = html.decode::<Probe>().unwrap_err();
        assert_eq!(err.to_string(), "<!doctype html>");

        let json = ApiResponse::json(200, r#"{"ok": true}"#);
        assert_eq!(json.decode::<Probe>().unwrap(), Probe { ok: true });
    }

    #[test]
    fn test_decode_accepts_json_with_charset() {
        let response = ApiResponse {
            status: 200,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: r#"{"ok": false}"#.to_string(),
        };
        assert_eq!(response.decode::<Probe>().unwrap(), Probe { ok: false });
    }

    #[test]
    fn test_decode_malformed_json_keeps_raw_text() {
        let response = ApiResponse::json(200, "{not json");
        let err = response.decode::<Probe>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson { .. }));
        assert_eq!(err.raw_body(), Some("{not json"));
    }

    #[test]
    fn test_missing_content_type() {
        let response = ApiResponse {
            status: 200,
            content_type: None,
            body: String::new(),
        };
        assert_eq!(
            response.decode::<Probe>().unwrap_err().to_string(),
            "Expected JSON, got "
        );
    }

    #[test]
    fn test_ensure_success() {
        assert!(ApiResponse::json(204, "").ensure_success("x").is_ok());
        let err = ApiResponse::json(404, "{}")
            .ensure_success("Failed to fetch expense")
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch expense: 404");
    }

    #[test]
    fn test_validation_message_prefers_detail() {
        let response = ApiResponse::json(400, r#"{"detail": "Bad input", "amount": ["x"]}"#);
        assert_eq!(response.validation_message(), "Bad input");
    }

    #[test]
    fn test_validation_message_joins_amount_errors() {
        let response = ApiResponse::json(
            400,
            r#"{"amount": ["A valid number is required.", "Too many digits."]}"#,
        );
        assert_eq!(
            response.validation_message(),
            "A valid number is required., Too many digits."
        );
    }

    #[test]
    fn test_validation_message_falls_back_to_other_field() {
        let response = ApiResponse::json(400, r#"{"currency": ["\"XYZ\" is not a valid choice."]}"#);
        assert_eq!(
            response.validation_message(),
            "currency: \"XYZ\" is not a valid choice."
        );
    }

    #[test]
    fn test_validation_message_keeps_backend_field_order() {
        let response = ApiResponse::json(
            400,
            r#"{"currency": ["\"XYZ\" is not a valid choice."], "category": ["\"travel\" is not a valid choice."]}"#,
        );
        assert_eq!(
            response.validation_message(),
            "currency: \"XYZ\" is not a valid choice."
        );
    }

    #[test]
    fn test_validation_message_fallback() {
        let html = ApiResponse {
            status: 500,
            content_type: Some("text/html".to_string()),
            body: "oops".to_string(),
        };
        assert_eq!(html.validation_message(), "Create failed (500)");
        assert_eq!(
            ApiResponse::json(400, "[]").validation_message(),
            "Create failed (400)"
        );
    }

    #[test]
    fn test_network_failure_messages() {
        assert!(is_network_failure_message("Failed to fetch"));
        assert!(is_network_failure_message(
            "NetworkError when attempting to fetch resource."
        ));
        assert!(is_network_failure_message("Load failed"));
        assert!(!is_network_failure_message("The operation was aborted."));
    }
}
