use leptos::prelude::*;

use catalog_core::ViewMode;

use crate::context::use_app_context;

/// Grid/list layout switch, persisted with the favorites
#[component]
pub fn ViewModeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let button = move |mode: ViewMode, label: &'static str| {
        view! {
            <button
                class=move || if ctx.view_mode() == mode { "view-mode active" } else { "view-mode" }
                aria-pressed=move || (ctx.view_mode() == mode).to_string()
                on:click=move |_| {
                    if ctx.view_mode() != mode {
                        ctx.toggle_view_mode();
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="view-mode-toggle">
            {button(ViewMode::Grid, "Grid")}
            {button(ViewMode::List, "List")}
        </div>
    }
}
