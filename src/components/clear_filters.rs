use leptos::prelude::*;

/// Clear-all action; only shown while some filter is active
#[component]
pub fn ClearFilters(#[prop(into)] visible: Signal<bool>, #[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button class="clear-filters" on:click=move |_| on_clear.run(())>
                "Clear all filters"
            </button>
        </Show>
    }
}
