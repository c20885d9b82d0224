//! Expense list page - all expenses with per-row actions

use crate::api::api;
use crate::components::{ErrorState, ExpenseTable, LoadingState};
use crate::prompt::BrowserPrompt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use spendboard_core::delete_with_confirmation;
use spendboard_types::ExpenseId;

#[component]
pub fn Expenses() -> impl IntoView {
    let expenses = LocalResource::new(move || async move { api().list_expenses().await });

    let on_delete = Callback::new(move |id: ExpenseId| {
        spawn_local(async move {
            let outcome = delete_with_confirmation(&api(), &BrowserPrompt, id).await;
            if outcome.is_deleted() {
                expenses.refetch();
            }
        });
    });

    view! {
        <div class="page expenses-page">
            <div class="page-header">
                <h1 class="page-title">"Expenses"</h1>
                <A href="/expenses/new" attr:class="btn btn-primary">"Add expense"</A>
            </div>

            <Suspense fallback=|| view! { <LoadingState label="Loading expenses…" /> }>
                {move || {
                    expenses
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="empty-hint">"No expenses yet. Add one to get started."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! { <ExpenseTable expenses=list.clone() on_delete /> }.into_any()
                            }
                            Err(e) => {
                                leptos::logging::warn!("loading expenses failed: {e}");
                                view! { <ErrorState message=e.to_string() /> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
