//! Page components

mod dashboard;
mod edit_expense;
mod expense_detail;
mod expenses;
mod new_expense;
mod rates;

pub use dashboard::Dashboard;
pub use edit_expense::EditExpense;
pub use expense_detail::ExpenseDetail;
pub use expenses::Expenses;
pub use new_expense::NewExpense;
pub use rates::Rates;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use spendboard_types::ExpenseId;

/// `:id` route parameter; `None` when missing or not a number
fn expense_id_param() -> Memo<Option<ExpenseId>> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("id").and_then(|id| id.parse().ok()))
}
