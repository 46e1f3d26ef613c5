//! Characters Page
//!
//! Searchable, filterable, paginated character list. Filter changes go through
//! the store and trigger a fetch; filters survive a visit to a detail page.

use leptos::prelude::*;

use catalog_core::filters::{FilterSet, GENDER_OPTIONS, SPECIES_OPTIONS};
use catalog_core::{Character, CharacterFilterPatch, EntityId, Outcome, Phase, Resource, ViewMode};

use crate::components::{
    CharacterCard, ClearFilters, ErrorPanel, FavoritesToggle, LoadingGrid, OptionFilter, Pagination,
    SearchBar, StatusFilter, ViewModeToggle,
};
use crate::context::use_app_context;
use crate::store::{navigate, use_app_store, Route};

#[component]
pub fn CharactersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let characters = ctx.characters;

    characters.refresh();

    let filters = Memo::new(move |_| characters.read(|s| s.filters.clone()));
    let phase = Memo::new(move |_| characters.read(|s| s.phase()));
    let view_mode = Signal::derive(move || ctx.view_mode());

    let update = move |patch: CharacterFilterPatch| characters.update_filters(patch);

    let results = move || {
        view! {
            <div class=move || match view_mode.get() {
                ViewMode::Grid => "card-grid",
                ViewMode::List => "card-list",
            }>
                <For
                    each=move || characters.read(|s| s.items.clone())
                    key=|character: &Character| character.id()
                    children=move |character| {
                        view! {
                            <CharacterCard
                                character=character
                                view_mode=view_mode
                                on_select=move |id: EntityId| navigate(&store, &ctx, Route::Character(id))
                            />
                        }
                    }
                />
            </div>
        }
    };

    let empty = move || {
        let message = if !filters.get().favorites_only {
            "No characters match these filters."
        } else if ctx.favorite_count() == 0 {
            "No favorites yet. Tap the heart on a character to save it."
        } else {
            "None of your favorites match these filters."
        };
        view! { <p class="empty-state">{message}</p> }
    };

    view! {
        <section class="characters-page">
            <div class="filters-panel">
                <SearchBar
                    value=Signal::derive(move || filters.get().name)
                    on_search=move |name: String| update(CharacterFilterPatch::name(name))
                    placeholder="Search characters..."
                />
                <StatusFilter
                    selected=Signal::derive(move || filters.get().status)
                    on_change=move |status: String| update(CharacterFilterPatch::status(status))
                />
                <OptionFilter
                    label="Species"
                    options=SPECIES_OPTIONS
                    selected=Signal::derive(move || filters.get().species)
                    on_change=move |species: String| update(CharacterFilterPatch::species(species))
                />
                <OptionFilter
                    label="Gender"
                    options=GENDER_OPTIONS
                    selected=Signal::derive(move || filters.get().gender)
                    on_change=move |gender: String| update(CharacterFilterPatch::gender(gender))
                />
                <FavoritesToggle
                    enabled=Signal::derive(move || filters.get().favorites_only)
                    count=Signal::derive(move || ctx.favorite_count())
                    on_toggle=move |enabled: bool| update(CharacterFilterPatch::favorites_only(enabled))
                />
                <ClearFilters
                    visible=Signal::derive(move || !filters.get().is_cleared())
                    on_clear=move |_: ()| characters.clear_filters()
                />
                <ViewModeToggle />
            </div>

            {move || match phase.get() {
                Phase::Idle | Phase::Loading => view! { <LoadingGrid /> }.into_any(),
                Phase::Settled(Outcome::Error) => view! {
                    <ErrorPanel
                        message=Signal::derive(move || characters.read(|s| s.error.clone().unwrap_or_default()))
                        on_retry=move |_: ()| characters.refresh()
                    />
                }.into_any(),
                Phase::Settled(Outcome::Empty) => empty().into_any(),
                Phase::Settled(Outcome::Results) => results().into_any(),
            }}

            <Pagination
                page=Signal::derive(move || filters.get().page)
                total_pages=Signal::derive(move || characters.read(|s| s.total_pages))
                can_previous=Signal::derive(move || characters.read(|s| s.can_go_previous()))
                can_next=Signal::derive(move || characters.read(|s| s.can_go_next()))
                on_previous=move |_: ()| characters.prev_page()
                on_next=move |_: ()| characters.next_page()
            />
        </section>
    }
}
