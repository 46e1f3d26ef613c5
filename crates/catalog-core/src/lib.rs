//! Catalog Core
//!
//! Everything the explorer does that does not need a browser:
//! - models: entities and the paginated envelope
//! - filters: filter state, partial updates, query encoding
//! - api: HTTP transport port and the catalog client
//! - favorites / theme: persisted preferences behind a storage port
//! - store: list/detail state machine driving the views
//! - debounce: keystroke coalescing for the search box

pub mod api;
pub mod config;
pub mod debounce;
pub mod favorites;
pub mod filters;
pub mod models;
pub mod notify;
pub mod storage;
pub mod store;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, ApiResult, CatalogApi, HttpResponse, HttpTransport, ReqwestTransport};
pub use config::ClientConfig;
pub use debounce::{Clock, Debouncer};
pub use favorites::{FavoritesState, FavoritesStore, ViewMode};
pub use filters::{CharacterFilterPatch, CharacterFilters, EpisodeFilterPatch, EpisodeFilters, FilterSet};
pub use models::{Character, EntityId, Episode, EpisodeCode, Gender, LocationRef, Page, PageInfo, Resource, Status};
pub use storage::{MemoryStorage, StorageError, StoragePort};
pub use store::{EntityState, EntityStore, Outcome, Phase};
pub use theme::{Theme, ThemePreference};
