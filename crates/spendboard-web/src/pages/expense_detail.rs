//! Expense detail page

use super::expense_id_param;
use crate::api::api;
use crate::components::{ErrorState, LoadingState};
use crate::prompt::BrowserPrompt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use spendboard_core::delete_with_confirmation;
use spendboard_types::{Expense, ExpenseId};

#[component]
pub fn ExpenseDetail() -> impl IntoView {
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
        <div class="page detail-page">
            <Suspense fallback=|| view! { <LoadingState label="Loading…" /> }>
                {move || {
                    expense
                        .get()
                        .map(|result| match result.as_ref() {
                            Ok(Some(expense)) => {
                                view! { <ExpenseCard expense=expense.clone() /> }.into_any()
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
fn ExpenseCard(expense: Expense) -> impl IntoView {
    let id: ExpenseId = expense.id;
    let navigate = use_navigate();

    let handle_delete = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = delete_with_confirmation(&api(), &BrowserPrompt, id).await;
            if outcome.is_deleted() {
                navigate("/", Default::default());
            }
        });
    };

    let merchant = expense.merchant().map(str::to_string);
    let description = expense.description().map(str::to_string);

    view! {
        <div class="detail-actions">
            <A href="/" attr:class="link">"← Back to list"</A>
            <A href=format!("/expenses/{}/edit", id) attr:class="btn btn-primary">"Edit"</A>
            <button type="button" class="btn btn-danger" on:click=handle_delete>
                "Delete"
            </button>
        </div>
        <div class="card detail-card">
            <h1 class="detail-amount">{expense.amount_display()}</h1>
            <dl class="detail-fields">
                <div>
                    <dt>"Category"</dt>
                    <dd class="capitalize">{expense.category.as_str()}</dd>
                </div>
                <div>
                    <dt>"Date"</dt>
                    <dd>{expense.date.to_string()}</dd>
                </div>
                {merchant.map(|merchant| view! {
                    <div>
                        <dt>"Merchant"</dt>
                        <dd>{merchant}</dd>
                    </div>
                })}
                {description.map(|description| view! {
                    <div>
                        <dt>"Description"</dt>
                        <dd>{description}</dd>
                    </div>
                })}
            </dl>
        </div>
    }
}
