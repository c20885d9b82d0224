//! Create/edit form for a single expense
//!
//! Inputs are uncontrolled: their values are read through `NodeRef`s on
//! submit, packaged into an [`ExpenseCreate`] and handed to `on_submit`.
//! The callback decides where to go next; an `Err` is shown under the form.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use spendboard_core::ExpenseDraft;
use spendboard_types::{Category, Expense, ExpenseCreate, SUPPORTED_CURRENCIES};
use std::future::Future;
use web_sys::SubmitEvent;

#[component]
pub fn ExpenseForm<F, Fut>(
    /// Record used to pre-fill the inputs
    #[prop(optional)]
    initial: Option<Expense>,
    #[prop(default = "Save")] submit_label: &'static str,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(ExpenseCreate) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let draft = initial
        .as_ref()
        .map(ExpenseDraft::from)
        .unwrap_or_default();

    let amount_ref = NodeRef::<html::Input>::new();
    let currency_ref = NodeRef::<html::Select>::new();
    let category_ref = NodeRef::<html::Select>::new();
    let date_ref = NodeRef::<html::Input>::new();
    let merchant_ref = NodeRef::<html::Input>::new();
    let description_ref = NodeRef::<html::Input>::new();

    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let submitted = ExpenseDraft {
            amount: input_value(&amount_ref),
            currency: select_value(&currency_ref),
            category: select_value(&category_ref),
            date: input_value(&date_ref),
            merchant: input_value(&merchant_ref),
            description: input_value(&description_ref),
        };
        let body = match submitted.into_create() {
            Ok(body) => body,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_pending.set(true);
        let result = on_submit(body);
        spawn_local(async move {
            if let Err(message) = result.await {
                leptos::logging::warn!("expense form submit failed: {message}");
                set_error.set(Some(message));
            }
            set_pending.set(false);
        });
    };

    let initial_currency = draft.currency.clone();
    let initial_category = draft.category.clone();

    view! {
        <form class="expense-form" on:submit=handle_submit>
            <div class="form-field">
                <label for="amount">"Amount *"</label>
                <input
                    id="amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    required
                    value=draft.amount
                    node_ref=amount_ref
                />
            </div>
            <div class="form-field">
                <label for="currency">"Currency"</label>
                <select id="currency" name="currency" node_ref=currency_ref>
                    {SUPPORTED_CURRENCIES
                        .into_iter()
                        .map(|code| {
                            view! {
                                <option value=code selected=code == initial_currency>
                                    {code}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-field">
                <label for="category">"Category *"</label>
                <select id="category" name="category" required node_ref=category_ref>
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            let name = category.as_str();
                            view! {
                                <option value=name selected=name == initial_category>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-field">
                <label for="date">"Date *"</label>
                <input
                    id="date"
                    name="date"
                    type="date"
                    required
                    value=draft.date
                    node_ref=date_ref
                />
            </div>
            <div class="form-field">
                <label for="merchant">"Merchant"</label>
                <input
                    id="merchant"
                    name="merchant"
                    type="text"
                    value=draft.merchant
                    node_ref=merchant_ref
                />
            </div>
            <div class="form-field">
                <label for="description">"Description"</label>
                <input
                    id="description"
                    name="description"
                    type="text"
                    value=draft.description
                    node_ref=description_ref
                />
            </div>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                {submit_label}
            </button>
        </form>
    }
}

fn input_value(node: &NodeRef<html::Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

fn select_value(node: &NodeRef<html::Select>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}
