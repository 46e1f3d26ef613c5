//! Favorites Store
//!
//! Persisted, insertion-ordered set of favorited entity identifiers plus the
//! grid/list display preference. Every mutation is written through to the
//! storage port before the call returns.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::FAVORITES_STORAGE_KEY;
use crate::models::EntityId;
use crate::notify::Subscribers;
use crate::storage::StoragePort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Persisted record: `{"favorites": [...], "viewMode": "grid"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesState {
    #[serde(default)]
    pub favorites: Vec<EntityId>,
    #[serde(default)]
    pub view_mode: ViewMode,
}

/// Shared handle; clones see the same set
#[derive(Clone)]
pub struct FavoritesStore {
    state: Rc<RefCell<FavoritesState>>,
    storage: Rc<dyn StoragePort>,
    subscribers: Rc<Subscribers>,
}

impl FavoritesStore {
    /// Restore the persisted record; a missing or unreadable one starts empty
    pub fn load(storage: Rc<dyn StoragePort>) -> Self {
        let mut state = match storage.read(FAVORITES_STORAGE_KEY) {
            Some(raw) => serde_json::from_str::<FavoritesState>(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable favorites record: {}", e);
                FavoritesState::default()
            }),
            None => FavoritesState::default(),
        };

        let mut seen = std::collections::HashSet::new();
        state.favorites.retain(|id| seen.insert(*id));
        info!("Loaded {} favorites", state.favorites.len());

        Self {
            state: Rc::new(RefCell::new(state)),
            storage,
            subscribers: Rc::new(Subscribers::default()),
        }
    }

    /// Remove `id` if present, otherwise append it. Returns whether it is now a favorite.
    pub fn toggle(&self, id: EntityId) -> bool {
        let now_favorite = {
            let mut state = self.state.borrow_mut();
            match state.favorites.iter().position(|fav| *fav == id) {
                Some(pos) => {
                    state.favorites.remove(pos);
                    false
                }
                None => {
                    state.favorites.push(id);
                    true
                }
            }
        };
        self.persist();
        self.subscribers.notify();
        now_favorite
    }

    pub fn is_favorite(&self, id: EntityId) -> bool {
        self.state.borrow().favorites.contains(&id)
    }

    /// Identifiers in insertion order
    pub fn favorites(&self) -> Vec<EntityId> {
        self.state.borrow().favorites.clone()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.borrow().view_mode
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.state.borrow_mut().view_mode = mode;
        self.persist();
        self.subscribers.notify();
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.add(callback);
    }

    /// Losing the write only loses this change on reload; memory stays updated
    fn persist(&self) {
        let raw = match serde_json::to_string(&*self.state.borrow()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(FAVORITES_STORAGE_KEY, &raw) {
            warn!("Failed to persist favorites: {}", e);
        }
    }
}
