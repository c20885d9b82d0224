//! reqwest-backed transport for native callers (CLI, scripts)

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::http::{ApiRequest, ApiResponse, Method, Transport, DEFAULT_HEADERS};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a client honouring the configured timeout
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        tracing::trace!(url = %request.url, "sending request");

        let mut builder = self.http.request(to_reqwest(request.method), &request.url);
        for (name, value) in DEFAULT_HEADERS {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Other(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read response body: {e}")))?;

        debug!(status, url = %request.url, "response received");

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ExpenseApi;
    use std::time::Duration;

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        // Nothing listens on the discard port
        let config = ApiConfig::new("http://127.0.0.1:9")
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        let transport = ReqwestTransport::new(&config).unwrap();
        let api = ExpenseApi::new(config, transport);

        let err = api.list_expenses().await.unwrap_err();
        assert!(err.is_unreachable(), "got {err:?}");
        assert!(err.to_string().contains("http://127.0.0.1:9/api/expenses/"));
    }
}
