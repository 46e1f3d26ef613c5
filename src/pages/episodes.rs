//! Episodes Page
//!
//! Episode list searchable by name and filterable by season code.

use leptos::prelude::*;

use catalog_core::filters::{FilterSet, SEASON_OPTIONS};
use catalog_core::{EntityId, Episode, EpisodeFilterPatch, Outcome, Phase, Resource};

use crate::components::{ClearFilters, ErrorPanel, LoadingGrid, OptionFilter, Pagination, SearchBar};
use crate::context::use_app_context;
use crate::store::{navigate, use_app_store, Route};

#[component]
pub fn EpisodesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let episodes = ctx.episodes;

    episodes.refresh();

    let filters = Memo::new(move |_| episodes.read(|s| s.filters.clone()));
    let phase = Memo::new(move |_| episodes.read(|s| s.phase()));
    let update = move |patch: EpisodeFilterPatch| episodes.update_filters(patch);

    view! {
        <section class="episodes-page">
            <div class="filters-panel">
                <SearchBar
                    value=Signal::derive(move || filters.get().name)
                    on_search=move |name: String| update(EpisodeFilterPatch::name(name))
                    placeholder="Search episodes..."
                />
                <OptionFilter
                    label="Season"
                    options=SEASON_OPTIONS
                    selected=Signal::derive(move || filters.get().episode)
                    on_change=move |season: String| update(EpisodeFilterPatch::episode(season))
                />
                <ClearFilters
                    visible=Signal::derive(move || !filters.get().is_cleared())
                    on_clear=move |_: ()| episodes.clear_filters()
                />
            </div>

            {move || match phase.get() {
                Phase::Idle | Phase::Loading => view! { <LoadingGrid count=6 /> }.into_any(),
                Phase::Settled(Outcome::Error) => view! {
                    <ErrorPanel
                        message=Signal::derive(move || episodes.read(|s| s.error.clone().unwrap_or_default()))
                        on_retry=move |_: ()| episodes.refresh()
                    />
                }.into_any(),
                Phase::Settled(Outcome::Empty) => view! {
                    <p class="empty-state">"No episodes match these filters."</p>
                }.into_any(),
                Phase::Settled(Outcome::Results) => view! {
                    <div class="episode-list">
                        <For
                            each=move || episodes.read(|s| s.items.clone())
                            key=|episode: &Episode| episode.id()
                            children=move |episode| view! {
                                <EpisodeRow
                                    episode=episode
                                    on_select=move |id: EntityId| navigate(&store, &ctx, Route::Episode(id))
                                />
                            }
                        />
                    </div>
                }.into_any(),
            }}

            <Pagination
                page=Signal::derive(move || filters.get().page)
                total_pages=Signal::derive(move || episodes.read(|s| s.total_pages))
                can_previous=Signal::derive(move || episodes.read(|s| s.can_go_previous()))
                can_next=Signal::derive(move || episodes.read(|s| s.can_go_next()))
                on_previous=move |_: ()| episodes.prev_page()
                on_next=move |_: ()| episodes.next_page()
            />
        </section>
    }
}

#[component]
fn EpisodeRow(episode: Episode, #[prop(into)] on_select: Callback<EntityId>) -> impl IntoView {
    let id = episode.id;
    let code = episode.code();
    let cast = format!("{} characters", episode.characters.len());

    view! {
        <article class="episode-row" on:click=move |_| on_select.run(id)>
            <span class="episode-code">{code.to_string()}</span>
            <div class="episode-body">
                <h3>{episode.name}</h3>
                <p class="episode-meta">
                    {format!("Season {} · Episode {}", code.season, code.number)}
                    " · "
                    {episode.air_date}
                </p>
            </div>
            <span class="episode-cast">{cast}</span>
        </article>
    }
}
