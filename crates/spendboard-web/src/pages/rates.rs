//! Live exchange rate lookup

use crate::api::api;
use crate::components::{CurrencySelect, ErrorState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use spendboard_core::FetchGuard;
use spendboard_types::ExchangeRate;

#[component]
pub fn Rates() -> impl IntoView {
    let from = RwSignal::new("USD".to_string());
    let to = RwSignal::new("EUR".to_string());
    let rate = RwSignal::new(None::<ExchangeRate>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let guard = FetchGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    let load = move || {
        let ticket = guard.begin();
        let guard = guard.clone();
        let (from_code, to_code) = (from.get_untracked(), to.get_untracked());
        loading.set(true);
        error.set(None);
        rate.set(None);

        spawn_local(async move {
            let result = api().fetch_exchange_rate(&from_code, &to_code).await;
            if !guard.is_current(&ticket) {
                return;
            }
            match result {
                Ok(value) => rate.set(Some(value)),
                Err(e) => {
                    leptos::logging::warn!("rate {from_code}->{to_code} failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    load();
    let load_on_click = load.clone();

    view! {
        <div class="page rates-page">
            <A href="/" attr:class="link back-link">"← Back to expenses"</A>
            <h1 class="page-title">"Live exchange rates"</h1>
            <p class="page-subtitle">
                "Rates from Frankfurter API via backend. Choose currencies and click Update."
            </p>

            <div class="rates-controls">
                <div class="form-field">
                    <label for="rate-from">"From"</label>
                    <CurrencySelect
                        id="rate-from"
                        value=from
                        on_change=Callback::new(move |code| from.set(code))
                    />
                </div>
                <div class="form-field">
                    <label for="rate-to">"To"</label>
                    <CurrencySelect
                        id="rate-to"
                        value=to
                        on_change=Callback::new(move |code| to.set(code))
                    />
                </div>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=move |_| load_on_click()
                >
                    {move || if loading.get() { "Loading…" } else { "Update" }}
                </button>
            </div>

            {move || error.get().map(|message| view! { <ErrorState message /> })}
            {move || {
                rate.get()
                    .filter(|_| error.with(Option::is_none))
                    .map(|rate| {
                        view! {
                            <div class="card rate-card">
                                <p class="rate-line">
                                    "1 " {rate.from} " = " <strong>{format!("{:.4}", rate.rate)}</strong>
                                    " " {rate.to}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
