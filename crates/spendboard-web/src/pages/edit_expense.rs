//! Edit page - pre-filled form submitting a PATCH

use super::expense_id_param;
use crate::api::api;
use crate::components::{ErrorState, ExpenseForm, LoadingState};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use spendboard_types::{Expense, ExpenseCreate, ExpensePatch};

#[component]
pub fn EditExpense() -> impl IntoView {
    let id = expense_id_param();
    let expense = LocalResource::new(move || {
        let id = id.get();
        async move {
            match id {
                Some(id) => api().get_expense(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="page form-page">
            <Suspense fallback=|| view! { <LoadingState label="Loading…" /> }>
                {move || {
                    expense
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(Some(expense)) => {
                                view! { <EditForm expense=expense.clone() /> }.into_any()
                            }
                            Ok(None) => {
                                view! { <p class="empty-hint">"Expense not found."</p> }.into_any()
                            }
                            Err(e) => {
                                leptos::logging::warn!("loading expense failed: {e}");
                                view! { <ErrorState message=e.to_string() /> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn EditForm(expense: Expense) -> impl IntoView {
    let id = expense.id;
    let navigate = use_navigate();

    let on_submit = move |body: ExpenseCreate| {
        let navigate = navigate.clone();
        async move {
            match api().update_expense(id, &ExpensePatch::from(body)).await {
                Ok(_) => {
                    navigate(&format!("/expenses/{}", id), Default::default());
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }
    };

    view! {
        <A href=format!("/expenses/{}", id) attr:class="link back-link">"← Back to expense"</A>
        <h1 class="page-title">"Edit expense"</h1>
        <ExpenseForm initial=expense on_submit />
    }
}
