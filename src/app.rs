//! Rick and Morty Explorer App
//!
//! Root component: builds the stores, provides them via context, keeps the
//! theme class in sync, and switches pages by route.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::{ClientConfig, MemoryStorage, StoragePort};

use crate::browser::{apply_theme_class, system_prefers_light, BrowserStorage};
use crate::components::ThemeToggle;
use crate::context::AppContext;
use crate::pages::{CharacterDetailPage, CharactersPage, EpisodeDetailPage, EpisodesPage};
use crate::store::{navigate, AppState, AppStateStoreFields, Route, Section};

#[component]
pub fn App() -> impl IntoView {
    let storage: Rc<dyn StoragePort> = if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, favorites and theme will not persist");
        Rc::new(MemoryStorage::new())
    };

    let ctx = AppContext::new(&ClientConfig::default(), storage, system_prefers_light());
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    Effect::new(move |_| apply_theme_class(ctx.theme()));

    let nav_class = move |section: Section| {
        move || {
            if store.route().get().section() == section {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Rick and Morty Explorer"</h1>
                <nav class="app-nav">
                    <button
                        class=nav_class(Section::Characters)
                        on:click=move |_| navigate(&store, &ctx, Route::Characters)
                    >
                        "Characters"
                    </button>
                    <button
                        class=nav_class(Section::Episodes)
                        on:click=move |_| navigate(&store, &ctx, Route::Episodes)
                    >
                        "Episodes"
                    </button>
                </nav>
                <ThemeToggle />
            </header>

            <main class="main-content">
                {move || match store.route().get() {
                    Route::Characters => view! { <CharactersPage /> }.into_any(),
                    Route::Character(id) => view! { <CharacterDetailPage id=id /> }.into_any(),
                    Route::Episodes => view! { <EpisodesPage /> }.into_any(),
                    Route::Episode(id) => view! { <EpisodeDetailPage id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
