//! spendboard-types - Shared data contracts for spendboard
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types mirroring the
//! expense backend's JSON.
//!
//! Used by:
//! - spendboard-core (API client and page logic)
//! - spendboard-web (frontend WASM)
//! - spendboard (CLI)

pub mod expense;
pub mod rate;
pub mod summary;

pub use expense::{
    Category, Expense, ExpenseCreate, ExpenseId, ExpensePatch, ParseCategoryError,
    DEFAULT_CURRENCY, SUPPORTED_CURRENCIES,
};
pub use rate::ExchangeRate;
pub use summary::{
    CategoryCurrencySummary, CategorySummary, CurrencySummary, ExpenseSummary,
    MonthCurrencySummary, MonthSummary, SummaryTotals,
};
