//! Episode Detail Page
//!
//! Shows one episode and resolves its cast with a single multi-id request
//! once the episode itself has loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_core::api::fetch_referenced;
use catalog_core::{Character, EntityId, Episode};

use crate::components::{CharacterCard, Spinner};
use crate::context::use_app_context;
use crate::store::{navigate, use_app_store, Route};

#[derive(Clone, PartialEq)]
enum Cast {
    Loading,
    Loaded(Vec<Character>),
    Failed(String),
}

#[component]
pub fn EpisodeDetailPage(id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let episodes = ctx.episodes;
    let cast = RwSignal::new(Cast::Loading);

    let api = ctx.character_api;
    episodes.load_then(id, move |episode| {
        let Some(episode) = episode.filter(|e| e.id == id) else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = fetch_referenced::<Character>(api.as_ref(), &episode.characters).await;
            cast.set(match result {
                Ok(characters) => Cast::Loaded(characters),
                Err(e) => {
                    log::warn!("cast for episode {} failed: {}", id, e);
                    Cast::Failed(e.to_string())
                }
            });
        });
    });

    let current = Memo::new(move |_| episodes.read(|s| s.current.clone().filter(|e| e.id == id)));
    let settled_error = Memo::new(move |_| episodes.read(|s| if s.loading { None } else { s.error.clone() }));

    let back = move |_| navigate(&store, &ctx, Route::Episodes);

    view! {
        <section class="detail-page">
            <button class="back-button" on:click=back>"‹ Back to Episodes"</button>
            {move || match (current.get(), settled_error.get()) {
                (Some(episode), _) => view! { <EpisodeProfile episode=episode cast=cast /> }.into_any(),
                (None, Some(message)) => view! {
                    <div class="not-found">
                        <h2>"Episode not found"</h2>
                        <p>{message}</p>
                        <button on:click=back>"Back to Episodes"</button>
                    </div>
                }.into_any(),
                (None, None) => view! { <Spinner label="Loading episode..." /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn EpisodeProfile(episode: Episode, cast: RwSignal<Cast>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let code = episode.code();
    let view_mode = Signal::derive(move || ctx.view_mode());
    let heading = format!("Characters ({})", episode.characters.len());

    view! {
        <article class="episode-profile">
            <span class="episode-code">{code.to_string()}</span>
            <h2>{episode.name}</h2>
            <dl class="profile-facts">
                <dt>"Season"</dt>
                <dd>{code.season}</dd>
                <dt>"Episode"</dt>
                <dd>{code.number}</dd>
                <dt>"Air date"</dt>
                <dd>{episode.air_date}</dd>
            </dl>
            <h3>{heading}</h3>
            {move || match cast.get() {
                Cast::Loading => view! { <Spinner label="Loading characters..." /> }.into_any(),
                Cast::Failed(message) => view! { <p class="error-message">{message}</p> }.into_any(),
                Cast::Loaded(characters) => view! {
                    <div class="card-grid">
                        {characters
                            .into_iter()
                            .map(|character| view! {
                                <CharacterCard
                                    character=character
                                    view_mode=view_mode
                                    on_select=move |id: EntityId| navigate(&store, &ctx, Route::Character(id))
                                />
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </article>
    }
}
