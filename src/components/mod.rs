//! UI Components
//!
//! Reusable Leptos components.

mod character_card;
mod clear_filters;
mod error_panel;
mod favorites_toggle;
mod loading;
mod option_filter;
mod pagination;
mod reference_chips;
mod search_bar;
mod theme_toggle;
mod view_mode_toggle;

pub use character_card::{CharacterCard, FavoriteButton, StatusBadge};
pub use clear_filters::ClearFilters;
pub use error_panel::ErrorPanel;
pub use favorites_toggle::FavoritesToggle;
pub use loading::{LoadingGrid, Spinner};
pub use option_filter::{OptionFilter, StatusFilter};
pub use pagination::Pagination;
pub use reference_chips::ReferenceChips;
pub use search_bar::SearchBar;
pub use theme_toggle::ThemeToggle;
pub use view_mode_toggle::ViewModeToggle;
