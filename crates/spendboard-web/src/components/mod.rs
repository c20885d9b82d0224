//! Leptos UI components

mod charts;
mod currency_select;
mod expense_form;
mod expense_table;
mod header;
mod stats_card;
mod status;

pub use charts::{BarChart, LineChart, PieChart};
pub use currency_select::CurrencySelect;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use header::Header;
pub use stats_card::StatsCard;
pub use status::{ErrorState, LoadingState};
