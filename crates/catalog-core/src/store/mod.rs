//! Entity Store
//!
//! Drives one list/detail view over a catalog collection:
//! - `set_filters` only merges; the caller follows it with `fetch_list`
//! - `fetch_list` settles the list from the service, or from the favorites
//!   set when the favorites-only flag is on
//! - `fetch_one` settles the detail slot
//!
//! Every API failure is caught here and becomes an error message in state.
//! Borrows of the state cell never span an `.await`. Overlapping fetches are
//! not cancelled; whichever settles last wins.

mod state;


use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::api::{ApiResult, CatalogApi};
use crate::favorites::FavoritesStore;
use crate::filters::FilterSet;
use crate::models::{EntityId, Resource};
use crate::notify::Subscribers;

pub use state::{EntityState, Outcome, Phase};

/// Settled list payload before it is written to state
struct Listing<R> {
    items: Vec<R>,
    total_pages: u32,
    has_next_page: bool,
}

pub struct EntityStore<R: Resource> {
    api: Rc<dyn CatalogApi<R>>,
    favorites: Option<FavoritesStore>,
    state: RefCell<EntityState<R>>,
    subscribers: Subscribers,
}

impl<R: Resource> EntityStore<R> {
    pub fn new(api: Rc<dyn CatalogApi<R>>) -> Self {
        Self {
            api,
            favorites: None,
            state: RefCell::new(EntityState::default()),
            subscribers: Subscribers::default(),
        }
    }

    /// Favorites set consulted when the favorites-only flag is on
    pub fn with_favorites(mut self, favorites: FavoritesStore) -> Self {
        self.favorites = Some(favorites);
        self
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.add(callback);
    }

    pub fn snapshot(&self) -> EntityState<R> {
        self.state.borrow().clone()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&EntityState<R>) -> T) -> T {
        f(&self.state.borrow())
    }

    pub fn filters(&self) -> R::Filters {
        self.state.borrow().filters.clone()
    }

    // ========================
    // Filters & Paging
    // ========================

    /// Shallow-merge a partial update. Does not fetch.
    pub fn set_filters(&self, patch: <R::Filters as FilterSet>::Patch) {
        self.update(|state| state.filters.merge(patch));
    }

    /// Reset every filter field and the page to defaults. Does not fetch.
    pub fn clear_filters(&self) {
        self.update(|state| state.filters = R::Filters::default());
    }

    /// Advance one page if the service reported one. Returns whether a fetch is due.
    pub fn next_page(&self) -> bool {
        self.step_page(|state| state.has_next_page.then(|| state.page() + 1))
    }

    /// Go back one page unless already on the first. Returns whether a fetch is due.
    pub fn prev_page(&self) -> bool {
        self.step_page(|state| (state.page() > 1).then(|| state.page() - 1))
    }

    fn step_page(&self, target: impl FnOnce(&EntityState<R>) -> Option<u32>) -> bool {
        let Some(page) = target(&self.state.borrow()) else {
            return false;
        };
        self.update(|state| state.filters.set_page(page));
        true
    }

    // ========================
    // Fetching
    // ========================

    pub async fn fetch_list(&self) {
        let filters = self.filters();
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.load_list(&filters).await;

        self.update(|state| {
            match result {
                Ok(listing) => {
                    debug!("{} list settled with {} items", R::PATH, listing.items.len());
                    state.items = listing.items;
                    state.total_pages = listing.total_pages;
                    state.has_next_page = listing.has_next_page;
                }
                Err(e) => {
                    warn!("{} list failed: {}", R::PATH, e);
                    state.error = Some(message_or(e.to_string(), || {
                        format!("Failed to fetch {}s", R::LABEL.to_lowercase())
                    }));
                    state.items.clear();
                    state.total_pages = 1;
                    state.has_next_page = false;
                }
            }
            state.loading = false;
            state.initialized = true;
        });
    }

    pub async fn fetch_one(&self, id: EntityId) {
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.api.get(id).await;

        self.update(|state| {
            match result {
                Ok(entity) => state.current = Some(entity),
                Err(e) => {
                    warn!("{} {} failed: {}", R::PATH, id, e);
                    state.error = Some(message_or(e.to_string(), || {
                        format!("Failed to fetch {}", R::LABEL.to_lowercase())
                    }));
                    state.current = None;
                }
            }
            state.loading = false;
        });
    }

    async fn load_list(&self, filters: &R::Filters) -> ApiResult<Listing<R>> {
        if filters.favorites_only() {
            return self.load_favorites(filters).await;
        }

        let page = self.api.list(filters).await?;
        Ok(Listing {
            has_next_page: page.has_next(),
            total_pages: page.info.pages,
            items: page.results,
        })
    }

    /// Favorites view: unpaginated, filtered client-side
    async fn load_favorites(&self, filters: &R::Filters) -> ApiResult<Listing<R>> {
        let ids = self
            .favorites
            .as_ref()
            .map(FavoritesStore::favorites)
            .unwrap_or_default();

        if ids.is_empty() {
            return Ok(Listing {
                items: Vec::new(),
                total_pages: 0,
                has_next_page: false,
            });
        }

        let items: Vec<R> = self
            .api
            .get_many(&ids)
            .await?
            .into_iter()
            .filter(|entity| entity.matches(filters))
            .collect();

        Ok(Listing {
            total_pages: if items.is_empty() { 0 } else { 1 },
            has_next_page: false,
            items,
        })
    }

    fn update(&self, f: impl FnOnce(&mut EntityState<R>)) {
        f(&mut self.state.borrow_mut());
        self.subscribers.notify();
    }
}

fn message_or(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.trim().is_empty() {
        fallback()
    } else {
        message
    }
}
