//! Stats card component for the dashboard

use leptos::prelude::*;

/// StatsCard component - a single metric with its label
#[component]
pub fn StatsCard(
    /// Card label (e.g., "Total spent")
    label: &'static str,
    /// Card value, already formatted (e.g., "1,234.56 EUR")
    value: String,
) -> impl IntoView {
    view! {
        <div class="card stats-card">
            <div class="stats-card-label">{label}</div>
            <div class="stats-card-value">{value}</div>
        </div>
    }
}
