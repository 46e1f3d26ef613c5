//! Favorites-only toggle

use leptos::prelude::*;

#[component]
pub fn FavoritesToggle(
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            class=move || if enabled.get() { "favorites-toggle active" } else { "favorites-toggle" }
            aria-pressed=move || enabled.get().to_string()
            on:click=move |_| on_toggle.run(!enabled.get_untracked())
        >
            {move || if enabled.get() { "♥ Favorites" } else { "♡ Favorites" }}
            <span class="favorites-count">{move || count.get()}</span>
        </button>
    }
}
