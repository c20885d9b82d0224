//! Dashboard page - summary cards and charts in a chosen display currency
//!
//! Every currency change starts a new summary fetch. Results of superseded
//! fetches, and of any fetch still running when the page unmounts, are
//! dropped by the model's fetch guard.

use crate::api::api;
use crate::components::{
    BarChart, CurrencySelect, ErrorState, LineChart, LoadingState, PieChart, StatsCard,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use spendboard_core::format::{format_amount, format_money};
use spendboard_core::{DashboardModel, DashboardView, SummaryFetch};
use spendboard_types::{CurrencySummary, ExpenseSummary};

#[component]
pub fn Dashboard() -> impl IntoView {
    let model = RwSignal::new(DashboardModel::default());

    let run = move |fetch: SummaryFetch| {
        spawn_local(async move {
            let result = api().fetch_summary(Some(fetch.currency())).await;
            if let Err(e) = &result {
                leptos::logging::warn!("summary fetch for {} failed: {e}", fetch.currency());
            }
            model.update(|m| {
                if !m.apply(&fetch, result) {
                    leptos::logging::log!("dropped stale summary for {}", fetch.currency());
                }
            });
        });
    };

    let guard = model.with_untracked(DashboardModel::guard);
    on_cleanup(move || guard.cancel());

    if let Some(fetch) = model.try_update(DashboardModel::start) {
        run(fetch);
    }

    let selected = Signal::derive(move || model.with(|m| m.currency().to_string()));
    let on_currency = Callback::new(move |code: String| {
        if let Some(Some(fetch)) = model.try_update(|m| m.select(&code)) {
            run(fetch);
        }
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
                <div class="currency-picker">
                    <label for="dashboard-currency">"Compare all in:"</label>
                    <CurrencySelect id="dashboard-currency" value=selected on_change=on_currency />
                </div>
                <A href="/" attr:class="link">"View expenses"</A>
            </div>

            {move || {
                model
                    .with(|m| match m.view() {
                        DashboardView::Loading => {
                            view! { <LoadingState label="Loading dashboard…" /> }.into_any()
                        }
                        DashboardView::Failed(message) => {
                            view! { <ErrorState message=message.to_string() /> }.into_any()
                        }
                        DashboardView::NoData => {
                            view! { <p class="empty-hint">"No data."</p> }.into_any()
                        }
                        DashboardView::Ready(summary) => {
                            view! {
                                <SummaryPanels
                                    summary=summary.clone()
                                    currency=m.display_currency().to_string()
                                />
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn SummaryPanels(summary: ExpenseSummary, currency: String) -> impl IntoView {
    let totals = summary.totals;

    let category_labels: Vec<String> =
        summary.by_category.iter().map(|c| c.category.clone()).collect();
    let category_totals: Vec<f64> = summary.by_category.iter().map(|c| c.total).collect();
    let month_labels: Vec<String> = summary
        .by_month
        .iter()
        .map(|m| m.month_label().to_string())
        .collect();
    let month_totals: Vec<f64> = summary.by_month.iter().map(|m| m.total).collect();
    let by_currency = summary.currencies().to_vec();

    view! {
        <p class="dashboard-note">
            "All amounts below are shown in " <strong>{currency.clone()}</strong>
            ". Amounts in other currencies are converted using live exchange rates for fair comparison."
        </p>

        <section class="dashboard-section">
            <h2 class="section-title">{format!("Summary ({})", currency)}</h2>
            <div class="stats-grid">
                <StatsCard label="Total spent" value=format_money(totals.total, &currency) />
                <StatsCard label="Number of expenses" value=totals.count.to_string() />
                <StatsCard label="Average" value=format_money(totals.average, &currency) />
            </div>
        </section>

        <section class="dashboard-section">
            <h2 class="section-title">{format!("Spending by category ({})", currency)}</h2>
            <div class="chart-grid-2">
                <div class="card chart-card">
                    <BarChart
                        labels=category_labels.clone()
                        values=category_totals.clone()
                        currency=currency.clone()
                    />
                </div>
                <div class="card chart-card">
                    <PieChart labels=category_labels values=category_totals currency=currency.clone() />
                </div>
            </div>
        </section>

        <section class="dashboard-section">
            <h2 class="section-title">{format!("Trend over time ({})", currency)}</h2>
            <div class="card chart-card">
                <LineChart labels=month_labels values=month_totals currency=currency.clone() />
            </div>
        </section>

        {(!by_currency.is_empty()).then(|| view! { <CurrencyBreakdown rows=by_currency /> })}
    }
}

/// Native-currency totals, present only when the backend reports them
#[component]
fn CurrencyBreakdown(rows: Vec<CurrencySummary>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h2 class="section-title">"By original currency"</h2>
            <div class="table-container">
                <table class="currency-table">
                    <thead>
                        <tr>
                            <th>"Currency"</th>
                            <th>"Total"</th>
                            <th>"Count"</th>
                            <th>"Average"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.currency}</td>
                                        <td>{format_amount(row.total)}</td>
                                        <td>{row.count}</td>
                                        <td>{format_amount(row.average)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
