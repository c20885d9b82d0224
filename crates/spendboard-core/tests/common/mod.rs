//! In-memory stand-in for the expense backend
//!
//! Routes requests by method and path the way the real service does and keeps
//! expenses in a `RefCell`. Responses can be scripted to exercise failures.

#![allow(dead_code)]

use serde_json::{json, Value};
use spendboard_core::{ApiConfig, ApiRequest, ApiResponse, ExpenseApi, Method, Transport, TransportError};
use spendboard_types::{Expense, ExpenseCreate, ExpensePatch};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub const BASE_URL: &str = "http://backend.test";

#[derive(Default)]
pub struct FakeBackend {
    expenses: RefCell<Vec<Expense>>,
    next_id: Cell<u64>,
    clock: Cell<u32>,
    requests: RefCell<Vec<ApiRequest>>,
    scripted: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    pub fn api(&self) -> ExpenseApi<&FakeBackend> {
        let config = ApiConfig::new(BASE_URL).expect("valid test base url");
        ExpenseApi::new(config, self)
    }

    /// Answer the next request with `response` instead of routing it
    pub fn script(&self, response: Result<ApiResponse, TransportError>) {
        self.scripted.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Expense> {
        self.expenses.borrow().clone()
    }

    fn timestamp(&self) -> String {
        let tick = self.clock.get();
        self.clock.set(tick + 1);
        format!("2024-06-01T12:00:{:02}Z", tick % 60)
    }

    fn route(&self, request: &ApiRequest) -> ApiResponse {
        let Some(rest) = request.url.strip_prefix(&format!("{}/api", BASE_URL)) else {
            return not_found();
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["expenses"]) => {
                let items = serde_json::to_string(&*self.expenses.borrow()).unwrap_or_default();
                ApiResponse::json(200, items)
            }
            (Method::Post, ["expenses"]) => self.create(request.body.as_deref().unwrap_or("")),
            (Method::Get, ["expenses", "summary"]) => self.summary(query),
            (Method::Get, ["expenses", id]) => match self.find(id) {
                Some(expense) => ApiResponse::json(200, to_text(&expense)),
                None => not_found(),
            },
            (Method::Patch, ["expenses", id]) => {
                self.update(id, request.body.as_deref().unwrap_or(""))
            }
            (Method::Delete, ["expenses", id]) => {
                let Ok(id) = id.parse::<u64>() else {
                    return not_found();
                };
                let mut expenses = self.expenses.borrow_mut();
                let before = expenses.len();
                expenses.retain(|e| e.id != id);
                if expenses.len() == before {
                    not_found()
                } else {
                    ApiResponse {
                        status: 204,
                        content_type: None,
                        body: String::new(),
                    }
                }
            }
            (Method::Get, ["rates"]) => {
                let from = param(query, "from").unwrap_or_default();
                let to = param(query, "to").unwrap_or_default();
                let rate = if from == to { 1.0 } else { 0.9234 };
                ApiResponse::json(200, json!({"rate": rate, "from": from, "to": to}).to_string())
            }
            _ => not_found(),
        }
    }

    fn find(&self, id: &str) -> Option<Expense> {
        let id = id.parse::<u64>().ok()?;
        self.expenses.borrow().iter().find(|e| e.id == id).cloned()
    }

    fn create(&self, body: &str) -> ApiResponse {
        let create: ExpenseCreate = match serde_json::from_str(body) {
            Ok(c) => c,
            Err(e) => return ApiResponse::json(400, json!({"detail": e.to_string()}).to_string()),
        };
        if create.amount.parse::<f64>().is_err() {
            return ApiResponse::json(
                400,
                json!({"amount": ["A valid number is required."]}).to_string(),
            );
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let now = self.timestamp();
        let expense = Expense {
            id,
            amount: create.amount,
            currency: create.currency,
            category: create.category,
            date: create.date,
            description: create.description.unwrap_or_default(),
            merchant: create.merchant.unwrap_or_default(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.expenses.borrow_mut().push(expense.clone());
        ApiResponse::json(201, to_text(&expense))
    }

    fn update(&self, id: &str, body: &str) -> ApiResponse {
        let Ok(patch) = serde_json::from_str::<ExpensePatch>(body) else {
            return ApiResponse::json(400, json!({"detail": "Malformed body"}).to_string());
        };
        let Ok(id) = id.parse::<u64>() else {
            return not_found();
        };
        let now = self.timestamp();
        let mut expenses = self.expenses.borrow_mut();
        let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
            return not_found();
        };

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(currency) = patch.currency {
            expense.currency = currency;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(merchant) = patch.merchant {
            expense.merchant = merchant;
        }
        expense.updated_at = now;
        ApiResponse::json(200, to_text(&*expense))
    }

    /// Native totals only; `to_currency` just tags the payload
    fn summary(&self, query: &str) -> ApiResponse {
        let expenses = self.expenses.borrow();
        let total: f64 = expenses
            .iter()
            .filter_map(|e| e.amount.parse::<f64>().ok())
            .sum();
        let count = expenses.len();
        let average = if count == 0 { 0.0 } else { total / count as f64 };

        let mut by_category: Vec<Value> = Vec::new();
        for expense in expenses.iter() {
            let amount = expense.amount.parse::<f64>().unwrap_or(0.0);
            let name = expense.category.as_str();
            match by_category.iter_mut().find(|row| row["category"] == name) {
                Some(row) => {
                    row["total"] = json!(row["total"].as_f64().unwrap_or(0.0) + amount);
                    row["count"] = json!(row["count"].as_u64().unwrap_or(0) + 1);
                }
                None => by_category.push(json!({"category": name, "total": amount, "count": 1})),
            }
        }

        let mut payload = json!({
            "by_category": by_category,
            "by_month": [],
            "totals": {"total": total, "count": count, "average": average}
        });
        if let Some(code) = param(query, "to_currency") {
            payload["display_currency"] = json!(code);
        }
        ApiResponse::json(200, payload.to_string())
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(scripted) = self.scripted.borrow_mut().pop_front() {
            return scripted;
        }
        Ok(self.route(&request))
    }
}

/// Test double for browser `confirm`/`alert`
pub struct ScriptedPrompt {
    answer: bool,
    pub confirmations: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }
}

impl spendboard_core::Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn not_found() -> ApiResponse {
    ApiResponse::json(404, json!({"detail": "Not found."}).to_string())
}

fn to_text<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
