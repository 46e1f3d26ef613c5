//! Character Card Component
//!
//! Grid tile or list row for one character, with status badge and favorite
//! button. Clicking the card opens the detail page.

use leptos::prelude::*;

use catalog_core::{Character, EntityId, Status, ViewMode};

use crate::context::use_app_context;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let class = match status {
        Status::Alive => "status-badge alive",
        Status::Dead => "status-badge dead",
        Status::Unknown => "status-badge unknown",
    };
    view! { <span class=class>{status.as_str()}</span> }
}

#[component]
pub fn FavoriteButton(id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let favorite = move || ctx.is_favorite(id);

    view! {
        <button
            class=move || if favorite() { "favorite-button active" } else { "favorite-button" }
            aria-label=move || if favorite() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |ev| {
                // card underneath navigates on click
                ev.stop_propagation();
                ctx.toggle_favorite(id);
            }
        >
            {move || if favorite() { "♥" } else { "♡" }}
        </button>
    }
}

#[component]
pub fn CharacterCard(
    character: Character,
    #[prop(into)] view_mode: Signal<ViewMode>,
    #[prop(into)] on_select: Callback<EntityId>,
) -> impl IntoView {
    let id = character.id;
    let class = move || match view_mode.get() {
        ViewMode::Grid => "character-card grid",
        ViewMode::List => "character-card list",
    };

    view! {
        <article class=class on:click=move |_| on_select.run(id)>
            <div class="card-image">
                <img src=character.image alt=character.name.clone() loading="lazy" />
                <div class="card-badges">
                    <FavoriteButton id=id />
                    <StatusBadge status=character.status />
                </div>
            </div>
            <div class="card-body">
                <h3 class="card-title">{character.name}</h3>
                <p class="card-species">{character.species}</p>
                <p class="card-location">{character.location.name}</p>
            </div>
        </article>
    }
}
