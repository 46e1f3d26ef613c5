//! Entity State
//!
//! Snapshot of one list/detail view: current page of results, the detail
//! slot, loading/error flags and the filters that produced them.

use crate::filters::FilterSet;
use crate::models::Resource;

/// Where the list view stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    Idle,
    Loading,
    Settled(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Results,
    Empty,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<R: Resource> {
    /// Current page (or filtered favorites), replaced on every fetch
    pub items: Vec<R>,
    /// Detail slot, independent of `items`
    pub current: Option<R>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: R::Filters,
    pub total_pages: u32,
    pub has_next_page: bool,
    /// Set once the first list fetch settled
    pub initialized: bool,
}

impl<R: Resource> Default for EntityState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            filters: R::Filters::default(),
            total_pages: 1,
            has_next_page: false,
            initialized: false,
        }
    }
}

impl<R: Resource> EntityState<R> {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Settled(Outcome::Error)
        } else if !self.initialized {
            Phase::Idle
        } else if self.items.is_empty() {
            Phase::Settled(Outcome::Empty)
        } else {
            Phase::Settled(Outcome::Results)
        }
    }

    pub fn page(&self) -> u32 {
        self.filters.page()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.loading && self.page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.loading && self.has_next_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Character;

    #[test]
    fn test_fresh_state_is_idle() {
        let state = EntityState::<Character>::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_pagination_bounds() {
        let mut state = EntityState::<Character>::default();
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());

        state.has_next_page = true;
        state.filters.set_page(2);
        assert!(state.can_go_previous());
        assert!(state.can_go_next());

        state.loading = true;
        assert!(!state.can_go_previous());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_error_outranks_initialization() {
        let mut state = EntityState::<Character>::default();
        state.error = Some("API Error: 500 - Internal Server Error".to_string());
        assert_eq!(state.phase(), Phase::Settled(Outcome::Error));

        state.loading = true;
        assert_eq!(state.phase(), Phase::Loading);
    }
}
