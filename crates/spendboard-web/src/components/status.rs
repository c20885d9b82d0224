//! Loading and error placeholders

use leptos::prelude::*;

#[component]
pub fn LoadingState(label: &'static str) -> impl IntoView {
    view! { <p class="loading">{label}</p> }
}

/// Inline error text; the message is shown verbatim
#[component]
pub fn ErrorState(message: String) -> impl IntoView {
    view! {
        <div class="error-state">
            <p>{message}</p>
        </div>
    }
}
