//! Dashboard state: selected display currency, held summary, load flags
//!
//! The page owns one [`DashboardModel`]. Every fetch it starts is described
//! by a [`SummaryFetch`]; only the newest one may write its result back.

use crate::error::ApiError;
use crate::fetch_guard::{FetchGuard, FetchTicket};
use spendboard_types::{ExpenseSummary, DEFAULT_CURRENCY};

/// A summary request the page should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFetch {
    ticket: FetchTicket,
    currency: String,
}

impl SummaryFetch {
    /// Currency to pass as `to_currency`
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// What the dashboard should render right now
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Failed(&'a str),
    NoData,
    Ready(&'a ExpenseSummary),
}

#[derive(Debug, Clone)]
pub struct DashboardModel {
    currency: String,
    guard: FetchGuard,
    summary: Option<ExpenseSummary>,
    loading: bool,
    error: Option<String>,
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl DashboardModel {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            guard: FetchGuard::new(),
            summary: None,
            loading: false,
            error: None,
        }
    }

    /// Fetch issued on mount for the current selection
    pub fn start(&mut self) -> SummaryFetch {
        self.loading = true;
        self.error = None;
        SummaryFetch {
            ticket: self.guard.begin(),
            currency: self.currency.clone(),
        }
    }

    /// Change the display currency. Re-selecting the current code issues
    /// nothing.
    pub fn select(&mut self, currency: &str) -> Option<SummaryFetch> {
        if currency == self.currency {
            return None;
        }
        self.currency = currency.to_string();
        Some(self.start())
    }

    /// Store a fetch result. Returns `false` (and changes nothing) when a
    /// newer fetch was started or the page was torn down since.
    pub fn apply(
        &mut self,
        fetch: &SummaryFetch,
        result: Result<ExpenseSummary, ApiError>,
    ) -> bool {
        if !self.guard.is_current(&fetch.ticket) {
            return false;
        }

        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        true
    }

    /// Handle for `on_cleanup`; cancelling it drops every in-flight result
    pub fn guard(&self) -> FetchGuard {
        self.guard.clone()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn summary(&self) -> Option<&ExpenseSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Currency the held amounts are expressed in. The backend's tag wins;
    /// totals are trusted to be converted when it is present.
    pub fn display_currency(&self) -> &str {
        self.summary
            .as_ref()
            .and_then(|s| s.display_currency.as_deref())
            .unwrap_or(&self.currency)
    }

    /// The previous summary stays visible while a newer selection loads
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading && self.summary.is_none() {
            return DashboardView::Loading;
        }
        if let Some(error) = &self.error {
            return DashboardView::Failed(error);
        }
        match &self.summary {
            Some(summary) => DashboardView::Ready(summary),
            None => DashboardView::NoData,
        }
    }
}
