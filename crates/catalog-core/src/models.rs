//! Catalog Models
//!
//! Data structures matching the catalog service payloads. Entities are
//! immutable snapshots; the client never edits them.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::filters::{CharacterFilters, EpisodeFilters, FilterSet};

/// Externally assigned entity identifier
pub type EntityId = i64;

/// A collection exposed by the catalog service
pub trait Resource: DeserializeOwned + Clone + std::fmt::Debug + 'static {
    /// Filter state driving list queries for this collection
    type Filters: FilterSet;

    /// Path segment under the base URL
    const PATH: &'static str;

    /// Human label used in error messages ("Character", "Episode")
    const LABEL: &'static str;

    fn id(&self) -> EntityId;

    /// Client-side filter used when the list is not fetched page by page
    fn matches(&self, filters: &Self::Filters) -> bool;
}

// ========================
// Characters
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "unknown",
        }
    }
}

/// Named link to a location resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub status: Status,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: Gender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// Episode URLs this character appears in
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Resource for Character {
    type Filters = CharacterFilters;
    const PATH: &'static str = "character";
    const LABEL: &'static str = "Character";

    fn id(&self) -> EntityId {
        self.id
    }

    fn matches(&self, filters: &CharacterFilters) -> bool {
        contains_ignore_case(&self.name, &filters.name)
            && equals_ignore_case(self.status.as_str(), &filters.status)
            && equals_ignore_case(&self.species, &filters.species)
            && equals_ignore_case(self.gender.as_str(), &filters.gender)
    }
}

// ========================
// Episodes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EntityId,
    pub name: String,
    pub air_date: String,
    /// Season/episode code such as "S01E02"
    pub episode: String,
    /// Character URLs appearing in this episode
    pub characters: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

impl Episode {
    pub fn code(&self) -> EpisodeCode {
        EpisodeCode::parse(&self.episode)
    }
}

impl Resource for Episode {
    type Filters = EpisodeFilters;
    const PATH: &'static str = "episode";
    const LABEL: &'static str = "Episode";

    fn id(&self) -> EntityId {
        self.id
    }

    fn matches(&self, filters: &EpisodeFilters) -> bool {
        contains_ignore_case(&self.name, &filters.name)
            && contains_ignore_case(&self.episode, &filters.episode)
    }
}

/// Parsed form of an episode code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCode {
    pub season: u32,
    /// Episode number as written ("02")
    pub number: String,
}

impl EpisodeCode {
    /// Parse "S01E02"; missing parts fall back to season 1, episode "1"
    pub fn parse(code: &str) -> Self {
        let season = digits_after(code, 'S')
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(1);
        let number = digits_after(code, 'E').unwrap_or("1").to_string();
        Self { season, number }
    }
}

impl std::fmt::Display for EpisodeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}E{}", self.season, self.number)
    }
}

fn digits_after(code: &str, marker: char) -> Option<&str> {
    code.match_indices(marker).find_map(|(pos, _)| {
        let rest = &code[pos + marker.len_utf8()..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}

// ========================
// Pagination Envelope
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of a list query; replaced wholesale on every fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    pub info: PageInfo,
    pub results: Vec<R>,
}

impl<R> Page<R> {
    /// What a "not found" list query means: nothing matched
    pub fn empty() -> Self {
        Self {
            info: PageInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.info.next.is_some()
    }
}

// ========================
// Cross-reference Helpers
// ========================

/// Identifier at the end of a resource URL ("…/episode/28" -> 28)
pub fn id_from_url(url: &str) -> Option<EntityId> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Identifiers of every parseable URL, order preserved
pub fn ids_from_urls<S: AsRef<str>>(urls: &[S]) -> Vec<EntityId> {
    urls.iter().filter_map(|url| id_from_url(url.as_ref())).collect()
}

/// Empty needle always matches
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Empty expected value always matches
fn equals_ignore_case(actual: &str, expected: &str) -> bool {
    expected.is_empty() || actual.to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::character_json;

    #[test]
    fn test_character_deserializes_from_service_payload() {
        let character: Character =
            serde_json::from_value(character_json(1, "Rick Sanchez", "Alive", "Human", "Male")).unwrap();

        assert_eq!(character.id(), 1);
        assert_eq!(character.status, Status::Alive);
        assert_eq!(character.gender, Gender::Male);
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.created.to_rfc3339(), "2017-11-04T18:48:46.250+00:00");
    }

    #[test]
    fn test_unknown_status_and_gender() {
        let character: Character =
            serde_json::from_value(character_json(7, "Abradolf Lincler", "unknown", "Human", "unknown")).unwrap();
        assert_eq!(character.status, Status::Unknown);
        assert_eq!(character.gender, Gender::Unknown);
    }

    #[test]
    fn test_unexpected_status_and_gender_fall_back_to_unknown() {
        let character: Character =
            serde_json::from_value(character_json(99, "Mr. Poopybutthole", "Missing", "Human", "Robotic")).unwrap();
        assert_eq!(character.status, Status::Unknown);
        assert_eq!(character.gender, Gender::Unknown);
    }

    #[test]
    fn test_character_matches_is_case_insensitive() {
        let character: Character =
            serde_json::from_value(character_json(2, "Morty Smith", "Alive", "Human", "Male")).unwrap();

        let mut filters = CharacterFilters::default();
        assert!(character.matches(&filters));

        filters.name = "MORT".to_string();
        filters.status = "alive".to_string();
        filters.species = "human".to_string();
        filters.gender = "male".to_string();
        assert!(character.matches(&filters));

        // exact match, not substring, for the taxonomy fields
        filters.species = "hum".to_string();
        assert!(!character.matches(&filters));
    }

    #[test]
    fn test_episode_code_parse() {
        assert_eq!(EpisodeCode::parse("S01E02"), EpisodeCode { season: 1, number: "02".to_string() });
        assert_eq!(EpisodeCode::parse("S04E10").to_string(), "S4E10");
        assert_eq!(EpisodeCode::parse("pilot"), EpisodeCode { season: 1, number: "1".to_string() });
    }

    #[test]
    fn test_ids_from_urls() {
        let urls = vec![
            "https://rickandmortyapi.com/api/character/1",
            "https://rickandmortyapi.com/api/character/38/",
            "https://rickandmortyapi.com/api/character/",
            "https://rickandmortyapi.com/api/character/abc",
        ];
        assert_eq!(ids_from_urls(&urls), vec![1, 38]);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<Character> = Page::empty();
        assert_eq!(page.info, PageInfo { count: 0, pages: 0, next: None, prev: None });
        assert!(page.results.is_empty());
        assert!(!page.has_next());
    }
}
