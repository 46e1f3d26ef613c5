use leptos::prelude::*;

/// Placeholder tiles while a list loads
#[component]
pub fn LoadingGrid(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="card-grid loading" aria-busy="true">
            {(0..count).map(|_| view! { <div class="card-skeleton"></div> }).collect_view()}
        </div>
    }
}

#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
            <p>{label}</p>
        </div>
    }
}
