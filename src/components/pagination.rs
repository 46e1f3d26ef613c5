//! Pagination Component
//!
//! Previous/next controls with a "Page X of Y" label. Enablement comes from
//! the store (`can_go_previous` / `can_go_next`), which already accounts for
//! in-flight loads.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] can_previous: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <div class="pagination">
                <button
                    class="page-button"
                    disabled=move || !can_previous.get()
                    on:click=move |_| on_previous.run(())
                >
                    "‹ Previous"
                </button>
                <span class="page-label">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="page-button"
                    disabled=move || !can_next.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next ›"
                </button>
            </div>
        </Show>
    }
}
