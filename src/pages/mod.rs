//! Pages
//!
//! One component per route.

mod character_detail;
mod characters;
mod episode_detail;
mod episodes;

pub use character_detail::CharacterDetailPage;
pub use characters::CharactersPage;
pub use episode_detail::EpisodeDetailPage;
pub use episodes::EpisodesPage;
