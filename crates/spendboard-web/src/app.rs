//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Header;
use crate::pages::{Dashboard, EditExpense, ExpenseDetail, Expenses, NewExpense, Rates};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=Expenses />
                        // Static segment must win over `:id`
                        <Route path=path!("/expenses/new") view=NewExpense />
                        <Route path=path!("/expenses/:id") view=ExpenseDetail />
                        <Route path=path!("/expenses/:id/edit") view=EditExpense />
                        <Route path=path!("/dashboard") view=Dashboard />
                        <Route path=path!("/rates") view=Rates />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
