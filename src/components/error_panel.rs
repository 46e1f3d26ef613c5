use leptos::prelude::*;

/// Error message with a retry action that re-runs the failed fetch
#[component]
pub fn ErrorPanel(#[prop(into)] message: Signal<String>, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2>"Something went wrong"</h2>
            <p class="error-message">{move || message.get()}</p>
            <button class="retry-button" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
