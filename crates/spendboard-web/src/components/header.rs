//! Header component

use leptos::prelude::*;
use leptos_router::components::A;

/// Brand and top-level navigation shared by every page
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="header-nav">
                <A href="/" attr:class="logo">"Expense Tracker"</A>
                <A href="/" attr:class="nav-link">"Expenses"</A>
                <A href="/expenses/new" attr:class="nav-link">"Add expense"</A>
                <A href="/dashboard" attr:class="nav-link">"Dashboard"</A>
                <A href="/rates" attr:class="nav-link">"Exchange rates"</A>
            </nav>
        </header>
    }
}
