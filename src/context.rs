//! Application Context
//!
//! Stores constructed once at startup and provided via Leptos Context API.
//! Core stores are not `Send`, so they live in local stored values; a version
//! signal bumped by the store's subscribers makes reads reactive.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_core::filters::FilterSet;
use catalog_core::{
    ApiClient, Character, ClientConfig, EntityId, EntityState, EntityStore, Episode, FavoritesStore,
    Resource, StoragePort, Theme, ThemePreference, ViewMode,
};

/// Reactive handle to one entity store
pub struct StoreHandle<R: Resource> {
    store: StoredValue<Rc<EntityStore<R>>, LocalStorage>,
    version: RwSignal<u32>,
}

impl<R: Resource> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for StoreHandle<R> {}

impl<R: Resource> StoreHandle<R> {
    fn new(store: EntityStore<R>) -> Self {
        let version = RwSignal::new(0u32);
        store.subscribe(move || version.update(|v| *v += 1));
        Self {
            store: StoredValue::new_local(Rc::new(store)),
            version,
        }
    }

    /// Tracked read of the store state
    pub fn read<T>(&self, f: impl FnOnce(&EntityState<R>) -> T) -> T {
        self.version.track();
        self.store.with_value(|store| store.with_state(f))
    }

    /// Fetch the list for the current filters
    pub fn refresh(&self) {
        let store = self.store.get_value();
        spawn_local(async move {
            store.fetch_list().await;
        });
    }

    /// Merge a filter change without fetching
    pub fn set_filters(&self, patch: <R::Filters as FilterSet>::Patch) {
        self.store.with_value(|store| store.set_filters(patch));
    }

    /// Merge a filter change, then fetch
    pub fn update_filters(&self, patch: <R::Filters as FilterSet>::Patch) {
        self.set_filters(patch);
        self.refresh();
    }

    /// Reset every filter, then fetch
    pub fn clear_filters(&self) {
        self.store.with_value(|store| store.clear_filters());
        self.refresh();
    }

    /// Reset every filter without fetching (leaving the section)
    pub fn reset_filters(&self) {
        self.store.with_value(|store| store.clear_filters());
    }

    pub fn next_page(&self) {
        if self.store.with_value(|store| store.next_page()) {
            self.refresh();
        }
    }

    pub fn prev_page(&self) {
        if self.store.with_value(|store| store.prev_page()) {
            self.refresh();
        }
    }

    pub fn load(&self, id: EntityId) {
        let store = self.store.get_value();
        spawn_local(async move {
            store.fetch_one(id).await;
        });
    }

    /// Fetch one entity, then hand the settled detail slot to `then`
    pub fn load_then(&self, id: EntityId, then: impl FnOnce(Option<R>) + 'static) {
        let store = self.store.get_value();
        spawn_local(async move {
            store.fetch_one(id).await;
            then(store.with_state(|state| state.current.clone()));
        });
    }
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub characters: StoreHandle<Character>,
    pub episodes: StoreHandle<Episode>,
    /// For cross-reference lookups (an episode's cast)
    pub character_api: StoredValue<Rc<ApiClient>, LocalStorage>,
    favorites: StoredValue<FavoritesStore, LocalStorage>,
    favorites_version: RwSignal<u32>,
    theme: StoredValue<Rc<ThemePreference>, LocalStorage>,
    theme_version: RwSignal<u32>,
    pub search_debounce: Duration,
}

impl AppContext {
    pub fn new(config: &ClientConfig, storage: Rc<dyn StoragePort>, system_prefers_light: bool) -> Self {
        let api = Rc::new(ApiClient::new(config));
        let favorites = FavoritesStore::load(storage.clone());
        let theme = Rc::new(ThemePreference::load(storage, system_prefers_light));

        let favorites_version = RwSignal::new(0u32);
        favorites.subscribe(move || favorites_version.update(|v| *v += 1));
        let theme_version = RwSignal::new(0u32);
        theme.subscribe(move || theme_version.update(|v| *v += 1));

        let characters = EntityStore::<Character>::new(api.clone()).with_favorites(favorites.clone());
        let episodes = EntityStore::<Episode>::new(api.clone());

        Self {
            characters: StoreHandle::new(characters),
            episodes: StoreHandle::new(episodes),
            character_api: StoredValue::new_local(api),
            favorites: StoredValue::new_local(favorites),
            favorites_version,
            theme: StoredValue::new_local(theme),
            theme_version,
            search_debounce: config.search_debounce,
        }
    }

    // ========================
    // Favorites
    // ========================

    pub fn is_favorite(&self, id: EntityId) -> bool {
        self.favorites_version.track();
        self.favorites.with_value(|favorites| favorites.is_favorite(id))
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites_version.track();
        self.favorites.with_value(|favorites| favorites.favorites().len())
    }

    /// Toggle; a favorites-only list is refetched so it stays in sync
    pub fn toggle_favorite(&self, id: EntityId) {
        self.favorites.with_value(|favorites| favorites.toggle(id));
        let favorites_only = self.characters.read_untracked(|state| state.filters.favorites_only);
        if favorites_only {
            self.characters.refresh();
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.favorites_version.track();
        self.favorites.with_value(|favorites| favorites.view_mode())
    }

    pub fn toggle_view_mode(&self) {
        self.favorites
            .with_value(|favorites| favorites.set_view_mode(favorites.view_mode().toggled()));
    }

    // ========================
    // Theme
    // ========================

    pub fn theme(&self) -> Theme {
        self.theme_version.track();
        self.theme.with_value(|theme| theme.theme())
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.with_value(|theme| theme.toggle())
    }
}

impl<R: Resource> StoreHandle<R> {
    /// Untracked read, for event handlers
    pub fn read_untracked<T>(&self, f: impl FnOnce(&EntityState<R>) -> T) -> T {
        self.store.with_value(|store| store.with_state(f))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
