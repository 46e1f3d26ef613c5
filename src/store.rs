//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the active
//! page; the catalog stores themselves live in `AppContext`. Pages switch on
//! this state alone, with no URL routing.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::EntityId;

use crate::context::AppContext;

/// Top-level area of the app; filters reset when it changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Characters,
    Episodes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Characters,
    Character(EntityId),
    Episodes,
    Episode(EntityId),
}

impl Route {
    pub fn section(&self) -> Section {
        match self {
            Route::Characters | Route::Character(_) => Section::Characters,
            Route::Episodes | Route::Episode(_) => Section::Episodes,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page currently shown
    pub route: Route,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch page. Leaving a section clears that section's filters.
pub fn navigate(store: &AppStore, ctx: &AppContext, to: Route) {
    let from = store.route().get_untracked();
    if from == to {
        return;
    }
    if from.section() != to.section() {
        match from.section() {
            Section::Characters => ctx.characters.reset_filters(),
            Section::Episodes => ctx.episodes.reset_filters(),
        }
    }
    log::debug!("navigate {:?} -> {:?}", from, to);
    store.route().set(to);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use catalog_core::{CharacterFilterPatch, ClientConfig, EpisodeFilterPatch, MemoryStorage};

    use super::*;

    fn setup() -> (AppStore, AppContext) {
        let owner = Owner::new();
        owner.set();
        // keep the reactive owner alive for the whole test
        std::mem::forget(owner);
        let ctx = AppContext::new(&ClientConfig::default(), Rc::new(MemoryStorage::new()), false);
        (Store::new(AppState::default()), ctx)
    }

    #[test]
    fn test_detail_routes_stay_in_section() {
        assert_eq!(Route::Character(1).section(), Route::Characters.section());
        assert_eq!(Route::Episode(1).section(), Route::Episodes.section());
        assert_ne!(Route::Characters.section(), Route::Episodes.section());
    }

    #[test]
    fn test_detail_page_keeps_list_filters() {
        let (store, ctx) = setup();
        ctx.characters.set_filters(CharacterFilterPatch::name("Rick"));

        navigate(&store, &ctx, Route::Character(1));
        assert_eq!(store.route().get_untracked(), Route::Character(1));
        assert_eq!(ctx.characters.read_untracked(|s| s.filters.name.clone()), "Rick");

        navigate(&store, &ctx, Route::Characters);
        assert_eq!(ctx.characters.read_untracked(|s| s.filters.name.clone()), "Rick");
    }

    #[test]
    fn test_leaving_a_section_clears_its_filters() {
        let (store, ctx) = setup();
        ctx.characters.set_filters(CharacterFilterPatch::status("dead"));
        ctx.episodes.set_filters(EpisodeFilterPatch::episode("S02"));

        navigate(&store, &ctx, Route::Episodes);
        assert_eq!(store.route().get_untracked(), Route::Episodes);
        assert!(ctx.characters.read_untracked(|s| s.filters == Default::default()));
        // the section being entered is untouched
        assert_eq!(ctx.episodes.read_untracked(|s| s.filters.episode.clone()), "S02");
    }
}
