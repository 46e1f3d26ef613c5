//! Filter State
//!
//! Search and filter parameters plus the page number driving list views.
//! Partial updates arrive as patches and are shallow-merged.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Status options (value, label); the empty value resets the filter
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All"),
    ("alive", "Alive"),
    ("dead", "Dead"),
    ("unknown", "Unknown"),
];

pub const SPECIES_OPTIONS: &[(&str, &str)] = &[
    ("", "All Species"),
    ("Human", "Human"),
    ("Alien", "Alien"),
    ("Humanoid", "Humanoid"),
    ("Robot", "Robot"),
    ("Animal", "Animal"),
    ("Cronenberg", "Cronenberg"),
    ("Disease", "Disease"),
];

pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("", "All Genders"),
    ("Female", "Female"),
    ("Male", "Male"),
    ("Genderless", "Genderless"),
    ("unknown", "Unknown"),
];

pub const SEASON_OPTIONS: &[(&str, &str)] = &[
    ("", "All Seasons"),
    ("S01", "Season 1"),
    ("S02", "Season 2"),
    ("S03", "Season 3"),
    ("S04", "Season 4"),
    ("S05", "Season 5"),
];

/// Filter state for one collection
pub trait FilterSet: Clone + Default + PartialEq + std::fmt::Debug + 'static {
    /// Partial update; `None` leaves a field untouched
    type Patch: Default;

    fn page(&self) -> u32;

    /// Page numbers are positive; 0 is stored as 1
    fn set_page(&mut self, page: u32);

    /// Shallow merge. A changed non-page field resets the page to 1
    /// unless the patch carries its own page.
    fn merge(&mut self, patch: Self::Patch);

    /// Non-empty query parameters in wire order, page last
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Whether the list is restricted to favorited entities
    fn favorites_only(&self) -> bool {
        false
    }

    /// Whether every field, page included, is at its default
    fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

// ========================
// Characters
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterFilters {
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub page: u32,
    pub favorites_only: bool,
}

impl Default for CharacterFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: String::new(),
            species: String::new(),
            gender: String::new(),
            page: 1,
            favorites_only: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFilterPatch {
    pub name: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub page: Option<u32>,
    pub favorites_only: Option<bool>,
}

impl CharacterFilterPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self { name: Some(value.into()), ..Default::default() }
    }

    pub fn status(value: impl Into<String>) -> Self {
        Self { status: Some(value.into()), ..Default::default() }
    }

    pub fn species(value: impl Into<String>) -> Self {
        Self { species: Some(value.into()), ..Default::default() }
    }

    pub fn gender(value: impl Into<String>) -> Self {
        Self { gender: Some(value.into()), ..Default::default() }
    }

    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }

    pub fn favorites_only(enabled: bool) -> Self {
        Self { favorites_only: Some(enabled), ..Default::default() }
    }
}

impl FilterSet for CharacterFilters {
    type Patch = CharacterFilterPatch;

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    fn merge(&mut self, patch: CharacterFilterPatch) {
        let mut changed = replace_field(&mut self.name, patch.name);
        changed |= replace_field(&mut self.status, patch.status);
        changed |= replace_field(&mut self.species, patch.species);
        changed |= replace_field(&mut self.gender, patch.gender);
        changed |= replace_field(&mut self.favorites_only, patch.favorites_only);
        settle_page(self, patch.page, changed);
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = non_empty_pairs(&[
            ("name", &self.name),
            ("status", &self.status),
            ("species", &self.species),
            ("gender", &self.gender),
        ]);
        pairs.push(("page", self.page.to_string()));
        pairs
    }

    fn favorites_only(&self) -> bool {
        self.favorites_only
    }
}

// ========================
// Episodes
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeFilters {
    pub name: String,
    /// Episode code prefix, e.g. "S01" for a whole season
    pub episode: String,
    pub page: u32,
}

impl Default for EpisodeFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            episode: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeFilterPatch {
    pub name: Option<String>,
    pub episode: Option<String>,
    pub page: Option<u32>,
}

impl EpisodeFilterPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self { name: Some(value.into()), ..Default::default() }
    }

    pub fn episode(value: impl Into<String>) -> Self {
        Self { episode: Some(value.into()), ..Default::default() }
    }

    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }
}

impl FilterSet for EpisodeFilters {
    type Patch = EpisodeFilterPatch;

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    fn merge(&mut self, patch: EpisodeFilterPatch) {
        let mut changed = replace_field(&mut self.name, patch.name);
        changed |= replace_field(&mut self.episode, patch.episode);
        settle_page(self, patch.page, changed);
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = non_empty_pairs(&[("name", &self.name), ("episode", &self.episode)]);
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

// ========================
// Query Encoding
// ========================

/// application/x-www-form-urlencoded value set (space handled separately)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

/// Join pairs as `k=v&k=v` with form-urlencoded values
pub fn encode_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            let encoded = utf8_percent_encode(value, QUERY_VALUE).to_string().replace(' ', "+");
            format!("{}={}", key, encoded)
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn non_empty_pairs(fields: &[(&'static str, &String)]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (*key, (*value).clone()))
        .collect()
}

/// Store the patched value, reporting whether it differed
fn replace_field<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}

fn settle_page<F: FilterSet>(filters: &mut F, page: Option<u32>, changed: bool) {
    match page {
        Some(page) => filters.set_page(page),
        None if changed => filters.set_page(1),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_never_sent() {
        let filters = CharacterFilters {
            name: String::new(),
            status: "Alive".to_string(),
            species: String::new(),
            gender: "Male".to_string(),
            page: 1,
            favorites_only: false,
        };
        assert_eq!(encode_query(&filters.query_pairs()), "status=Alive&gender=Male&page=1");
    }

    #[test]
    fn test_all_fields_in_wire_order() {
        let filters = CharacterFilters {
            name: "Rick".to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            page: 2,
            favorites_only: true,
        };
        assert_eq!(
            encode_query(&filters.query_pairs()),
            "name=Rick&status=Alive&species=Human&gender=Male&page=2"
        );
    }

    #[test]
    fn test_values_are_form_encoded() {
        let filters = EpisodeFilters { name: "Rick & Morty's".to_string(), episode: String::new(), page: 1 };
        assert_eq!(encode_query(&filters.query_pairs()), "name=Rick+%26+Morty%27s&page=1");
    }

    #[test]
    fn test_changing_a_field_resets_page() {
        let mut filters = CharacterFilters::default();
        filters.merge(CharacterFilterPatch::page(4));
        assert_eq!(filters.page, 4);

        filters.merge(CharacterFilterPatch::status("dead"));
        assert_eq!(filters.status, "dead");
        assert_eq!(filters.page, 1);

        filters.merge(CharacterFilterPatch::page(3));
        filters.merge(CharacterFilterPatch::favorites_only(true));
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_unchanged_field_keeps_page() {
        let mut filters = CharacterFilters { status: "alive".to_string(), page: 3, ..Default::default() };
        filters.merge(CharacterFilterPatch::status("alive"));
        assert_eq!(filters.page, 3);
    }

    #[test]
    fn test_explicit_page_wins_and_is_positive() {
        let mut filters = EpisodeFilters::default();
        filters.merge(EpisodeFilterPatch { name: Some("Pilot".to_string()), episode: None, page: Some(2) });
        assert_eq!(filters.page, 2);

        filters.merge(EpisodeFilterPatch::page(0));
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_is_cleared_counts_page() {
        let mut filters = CharacterFilters::default();
        assert!(filters.is_cleared());

        // a later page alone still has something to clear
        filters.set_page(4);
        assert!(!filters.is_cleared());

        filters.merge(CharacterFilterPatch::gender("Female"));
        assert!(!filters.is_cleared());

        let mut episodes = EpisodeFilters::default();
        episodes.merge(EpisodeFilterPatch::episode("S03"));
        assert!(!episodes.is_cleared());
        episodes = EpisodeFilters::default();
        assert!(episodes.is_cleared());
    }
}
