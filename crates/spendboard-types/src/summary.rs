//! Aggregates returned by `GET /expenses/summary/`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub average: f64,
}

/// Spend for one category. The category is free text so that rows for
/// categories this build does not know about still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// First day of the month as sent by the backend (`2024-01-01`, possibly
    /// with a time suffix)
    pub month: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

impl MonthSummary {
    /// `YYYY-MM`
    pub fn month_label(&self) -> &str {
        self.month.get(..7).unwrap_or(&self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySummary {
    pub currency: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCurrencySummary {
    pub category: String,
    pub currency: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCurrencySummary {
    pub month: String,
    pub currency: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

/// Server-computed statistics over all expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    #[serde(default)]
    pub by_category: Vec<CategorySummary>,
    #[serde(default)]
    pub by_month: Vec<MonthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_currency: Option<Vec<CurrencySummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_category_currency: Option<Vec<CategoryCurrencySummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_month_currency: Option<Vec<MonthCurrencySummary>>,
    #[serde(default)]
    pub totals: SummaryTotals,
    /// Set when the summary was requested with `?to_currency=`; every amount
    /// is then expressed in this currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_currency: Option<String>,
}

impl ExpenseSummary {
    pub fn is_empty(&self) -> bool {
        self.totals.count == 0 && self.by_category.is_empty() && self.by_month.is_empty()
    }

    /// Per-currency rows, empty when the backend converted everything
    pub fn currencies(&self) -> &[CurrencySummary] {
        self.by_currency.as_deref().unwrap_or(&[])
    }
}
