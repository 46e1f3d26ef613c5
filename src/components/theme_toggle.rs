use leptos::prelude::*;

use catalog_core::Theme;

use crate::context::use_app_context;

/// Dark/light switch; the root element class follows via an effect in `App`
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            class="theme-toggle"
            title=move || match ctx.theme() {
                Theme::Dark => "Switch to light mode",
                Theme::Light => "Switch to dark mode",
            }
            on:click=move |_| {
                let theme = ctx.toggle_theme();
                log::info!("theme set to {}", theme.as_str());
            }
        >
            {move || match ctx.theme() {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
