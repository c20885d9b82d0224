//! Typed client for the expense backend
//!
//! One method per backend operation. Every call is a single round trip: no
//! retry, no caching, no ordering between calls.

use crate::config::ApiConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{ApiRequest, ApiResponse, Method, Transport};
use serde::Serialize;
use serde_json::Value;
use spendboard_types::{
    Expense, ExpenseCreate, ExpenseId, ExpensePatch, ExpenseSummary, ExchangeRate,
};

#[derive(Debug, Clone)]
pub struct ExpenseApi<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ExpenseApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /expenses/`. A body that is not a JSON array yields an empty list.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let response = self.send(ApiRequest::get(self.expenses_url())).await?;
        response.ensure_success("Failed to fetch expenses")?;

        match response.decode::<Value>()? {
            Value::Array(items) => {
                serde_json::from_value(Value::Array(items)).map_err(|e| ApiError::InvalidJson {
                    message: e.to_string(),
                    body: response.body.clone(),
                })
            }
            _ => Ok(Vec::new()),
        }
    }

    /// `GET /expenses/{id}/`
    pub async fn get_expense(&self, id: ExpenseId) -> Result<Expense, ApiError> {
        let response = self.send(ApiRequest::get(self.expense_url(id))).await?;
        response.ensure_success("Failed to fetch expense")?;
        response.decode()
    }

    /// `POST /expenses/`. Rejections surface the backend's first validation
    /// message rather than a bare status.
    pub async fn create_expense(&self, expense: &ExpenseCreate) -> Result<Expense, ApiError> {
        let request = ApiRequest::with_json(Method::Post, self.expenses_url(), to_json(expense)?);
        let response = self.send(request).await?;

        if !response.ok() {
            return Err(ApiError::Validation {
                message: response.validation_message(),
                status: response.status,
            });
        }
        response.decode()
    }

    /// `PATCH /expenses/{id}/`
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        patch: &ExpensePatch,
    ) -> Result<Expense, ApiError> {
        let request = ApiRequest::with_json(Method::Patch, self.expense_url(id), to_json(patch)?);
        let response = self.send(request).await?;
        response.ensure_success("Failed to update expense")?;
        response.decode()
    }

    /// `DELETE /expenses/{id}/`. The response body is ignored.
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<(), ApiError> {
        let response = self.send(ApiRequest::delete(self.expense_url(id))).await?;
        response.ensure_success("Failed to delete expense")
    }

    /// `GET /expenses/summary/`, converted server-side when `to_currency` is
    /// given
    pub async fn fetch_summary(
        &self,
        to_currency: Option<&str>,
    ) -> Result<ExpenseSummary, ApiError> {
        let response = self.send(ApiRequest::get(self.summary_url(to_currency))).await?;
        response.ensure_success("Failed to fetch summary")?;
        response.decode()
    }

    /// `GET /rates/?from=..&to=..`
    pub async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate, ApiError> {
        let response = self.send(ApiRequest::get(self.rates_url(from, to))).await?;
        response.ensure_success("Failed to fetch exchange rate")?;
        response.decode()
    }

    pub fn expenses_url(&self) -> String {
        self.config.api_url("/expenses/")
    }

    pub fn expense_url(&self, id: ExpenseId) -> String {
        self.config.api_url(&format!("/expenses/{}/", id))
    }

    pub fn summary_url(&self, to_currency: Option<&str>) -> String {
        match to_currency.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => self.config.api_url(&format!(
                "/expenses/summary/?to_currency={}",
                urlencoding::encode(code)
            )),
            None => self.config.api_url("/expenses/summary/"),
        }
    }

    pub fn rates_url(&self, from: &str, to: &str) -> String {
        self.config.api_url(&format!(
            "/rates/?from={}&to={}",
            urlencoding::encode(from),
            urlencoding::encode(to)
        ))
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url.clone();
        tracing::debug!(method = %request.method, url = %url, "api request");
        self.transport
            .send(request)
            .await
            .map_err(|e| match e {
                TransportError::Connect(_) => ApiError::Unreachable { url },
                TransportError::Other(message) => ApiError::Transport { message },
            })
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Transport {
        message: format!("failed to encode request body: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unused;

    impl Transport for Unused {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
            Err(TransportError::Other("unused".to_string()))
        }
    }

    fn api() -> ExpenseApi<Unused> {
        ExpenseApi::new(ApiConfig::new("http://127.0.0.1:8000/").unwrap(), Unused)
    }

    #[test]
    fn test_expense_urls() {
        let api = api();
        assert_eq!(api.expenses_url(), "http://127.0.0.1:8000/api/expenses/");
        assert_eq!(api.expense_url(42), "http://127.0.0.1:8000/api/expenses/42/");
    }

    #[test]
    fn test_summary_url_with_and_without_currency() {
        let api = api();
        assert_eq!(
            api.summary_url(None),
            "http://127.0.0.1:8000/api/expenses/summary/"
        );
        assert_eq!(
            api.summary_url(Some("")),
            "http://127.0.0.1:8000/api/expenses/summary/"
        );
        assert_eq!(
            api.summary_url(Some("EUR")),
            "http://127.0.0.1:8000/api/expenses/summary/?to_currency=EUR"
        );
        assert_eq!(
            api.summary_url(Some("A&B")),
            "http://127.0.0.1:8000/api/expenses/summary/?to_currency=A%26B"
        );
    }

    #[test]
    fn test_rates_url() {
        assert_eq!(
            api().rates_url("USD", "EUR"),
            "http://127.0.0.1:8000/api/rates/?from=USD&to=EUR"
        );
    }

    #[tokio::test]
    async fn test_other_transport_failure_is_not_unreachable() {
        let err = api().list_expenses().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport {
                message: "unused".to_string()
            }
        );
    }
}
