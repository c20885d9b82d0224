//! Select over the supported currency codes

use leptos::prelude::*;
use spendboard_types::SUPPORTED_CURRENCIES;

/// Controlled currency `<select>`; `on_change` receives the chosen code
#[component]
pub fn CurrencySelect(
    id: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {SUPPORTED_CURRENCIES
                .into_iter()
                .map(|code| {
                    view! {
                        <option value=code prop:selected=move || value.get() == code>
                            {code}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
