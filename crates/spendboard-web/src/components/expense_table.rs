//! Expense list table

use leptos::prelude::*;
use leptos_router::components::A;
use spendboard_types::{Expense, ExpenseId};

/// One row per expense with View/Edit links and a Delete button
#[component]
pub fn ExpenseTable(expenses: Vec<Expense>, on_delete: Callback<ExpenseId>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="expense-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Amount"</th>
                        <th>"Category"</th>
                        <th>"Merchant"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {expenses
                        .into_iter()
                        .map(|expense| {
                            let id = expense.id;
                            let merchant = expense.merchant().unwrap_or("—").to_string();
                            view! {
                                <tr>
                                    <td>{expense.date.to_string()}</td>
                                    <td>{expense.amount_display()}</td>
                                    <td class="capitalize">{expense.category.as_str()}</td>
                                    <td>{merchant}</td>
                                    <td class="actions">
                                        <A href=format!("/expenses/{}", id) attr:class="link">"View"</A>
                                        <A href=format!("/expenses/{}/edit", id) attr:class="link">"Edit"</A>
                                        <button
                                            type="button"
                                            class="link link-danger"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
