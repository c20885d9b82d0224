//! Browser transport for the expense API
//!
//! Requests go out through `fetch` in CORS mode without credentials. A fetch
//! that never produced a response is reported as a connection failure so the
//! client can rewrite it into the "Cannot reach backend" message.

use gloo_net::http::{Request, RequestBuilder};
use spendboard_core::http::{is_network_failure_message, DEFAULT_HEADERS};
use spendboard_core::{ApiConfig, ApiRequest, ApiResponse, ExpenseApi, Method, Transport, TransportError};
use web_sys::{RequestCredentials, RequestMode};

/// Client type used by every page
pub type Api = ExpenseApi<GlooTransport>;

/// `fetch`-backed [`Transport`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = builder_for(request.method, &request.url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Omit);
        for (name, value) in DEFAULT_HEADERS {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Other(e.to_string()))?;

        let response = prepared.send().await.map_err(classify)?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response.text().await.map_err(classify)?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

fn classify(error: gloo_net::Error) -> TransportError {
    match error {
        gloo_net::Error::JsError(js) if is_network_failure_message(&js.message) => {
            TransportError::Connect(js.message)
        }
        other => TransportError::Other(other.to_string()),
    }
}

/// Backend configuration baked in at build time.
///
/// `SPENDBOARD_API_BASE_URL` is read when the bundle is compiled; an invalid
/// value falls back to the local default with a console warning.
pub fn config() -> ApiConfig {
    match ApiConfig::from_optional(option_env!("SPENDBOARD_API_BASE_URL")) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; using the default backend");
            ApiConfig::default()
        }
    }
}

pub fn api() -> Api {
    ExpenseApi::new(config(), GlooTransport)
}
