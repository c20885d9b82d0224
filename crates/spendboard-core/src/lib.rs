//! spendboard-core - Core library for spendboard
//!
//! Provides the typed expense API client, its configuration and error
//! taxonomy, and the browser-independent parts of the pages (fetch guard,
//! dashboard state, delete flow, form draft, formatting, chart geometry).

pub mod actions;
pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod fetch_guard;
pub mod format;
pub mod http;
#[cfg(feature = "native")]
pub mod native;
pub mod palette;

pub use actions::{delete_with_confirmation, DeleteOutcome, Prompt, DELETE_PROMPT};
pub use client::ExpenseApi;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use dashboard::{DashboardModel, DashboardView, SummaryFetch};
pub use draft::ExpenseDraft;
pub use error::{ApiError, ConfigError, TransportError};
pub use fetch_guard::{FetchGuard, FetchTicket};
pub use http::{ApiRequest, ApiResponse, Method, Transport};
#[cfg(feature = "native")]
pub use native::ReqwestTransport;
