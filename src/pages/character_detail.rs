//! Character Detail Page

use leptos::prelude::*;

use catalog_core::{Character, EntityId};

use crate::components::{FavoriteButton, ReferenceChips, Spinner, StatusBadge};
use crate::context::use_app_context;
use crate::store::{navigate, use_app_store, Route};

#[component]
pub fn CharacterDetailPage(id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let characters = ctx.characters;

    characters.load(id);

    // A previous character may still sit in the detail slot until this load settles
    let current = Memo::new(move |_| characters.read(|s| s.current.clone().filter(|c| c.id == id)));
    let settled_error = Memo::new(move |_| characters.read(|s| if s.loading { None } else { s.error.clone() }));

    let back = move |_| navigate(&store, &ctx, Route::Characters);

    view! {
        <section class="detail-page">
            <button class="back-button" on:click=back>"‹ Back to Characters"</button>
            {move || match (current.get(), settled_error.get()) {
                (Some(character), _) => view! { <CharacterProfile character=character /> }.into_any(),
                (None, Some(message)) => view! {
                    <div class="not-found">
                        <h2>"Character not found"</h2>
                        <p>{message}</p>
                        <button on:click=back>"Back to Characters"</button>
                    </div>
                }.into_any(),
                (None, None) => view! { <Spinner label="Loading character..." /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn CharacterProfile(character: Character) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let kind = if character.kind.is_empty() { "-".to_string() } else { character.kind.clone() };
    let created = character.created.format("%B %-d, %Y").to_string();
    let appearances = format!("Episodes ({})", character.episode.len());

    view! {
        <article class="character-profile">
            <div class="profile-image">
                <img src=character.image alt=character.name.clone() />
                <FavoriteButton id=character.id />
            </div>
            <div class="profile-body">
                <h2>{character.name}</h2>
                <StatusBadge status=character.status />
                <dl class="profile-facts">
                    <dt>"Species"</dt>
                    <dd>{character.species}</dd>
                    <dt>"Type"</dt>
                    <dd>{kind}</dd>
                    <dt>"Gender"</dt>
                    <dd>{character.gender.as_str()}</dd>
                    <dt>"Origin"</dt>
                    <dd>{character.origin.name}</dd>
                    <dt>"Last known location"</dt>
                    <dd>{character.location.name}</dd>
                    <dt>"Created"</dt>
                    <dd>{created}</dd>
                </dl>
                <h3>{appearances}</h3>
                <ReferenceChips
                    urls=character.episode
                    label="Episode"
                    on_select=move |id: EntityId| navigate(&store, &ctx, Route::Episode(id))
                />
            </div>
        </article>
    }
}
