//! Create page

use crate::api::api;
use crate::components::ExpenseForm;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use spendboard_types::ExpenseCreate;

#[component]
pub fn NewExpense() -> impl IntoView {
    let navigate = use_navigate();

    let on_submit = move |body: ExpenseCreate| {
        let navigate = navigate.clone();
        async move {
            match api().create_expense(&body).await {
                Ok(_) => {
                    navigate("/", Default::default());
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }
    };

    view! {
        <div class="page form-page">
            <A href="/" attr:class="link back-link">"← Back to list"</A>
            <h1 class="page-title">"Add expense"</h1>
            <ExpenseForm on_submit submit_label="Create expense" />
        </div>
    }
}
