//! Theme Preference
//!
//! Dark/light color theme persisted under its own storage key.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use crate::config::THEME_STORAGE_KEY;
use crate::notify::Subscribers;
use crate::storage::StoragePort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub struct ThemePreference {
    theme: Cell<Theme>,
    storage: Rc<dyn StoragePort>,
    subscribers: Subscribers,
}

impl ThemePreference {
    /// Stored theme wins; otherwise the system preference decides
    pub fn load(storage: Rc<dyn StoragePort>, system_prefers_light: bool) -> Self {
        let theme = storage
            .read(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(if system_prefers_light { Theme::Light } else { Theme::Dark });

        let preference = Self {
            theme: Cell::new(theme),
            storage,
            subscribers: Subscribers::default(),
        };
        preference.persist();
        preference
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        self.persist();
        self.subscribers.notify();
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.add(callback);
    }

    fn persist(&self) {
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, self.theme().as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_stored_theme_wins() {
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light"));
        let preference = ThemePreference::load(storage, false);
        assert_eq!(preference.theme(), Theme::Light);
    }

    #[test]
    fn test_system_preference_without_stored_theme() {
        let preference = ThemePreference::load(Rc::new(MemoryStorage::new()), true);
        assert_eq!(preference.theme(), Theme::Light);

        let preference = ThemePreference::load(Rc::new(MemoryStorage::new()), false);
        assert_eq!(preference.theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_value_is_ignored() {
        let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "sepia"));
        let preference = ThemePreference::load(storage, false);
        assert_eq!(preference.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let preference = ThemePreference::load(storage.clone(), false);

        assert_eq!(preference.toggle(), Theme::Light);
        assert_eq!(storage.read(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(preference.toggle(), Theme::Dark);
        assert_eq!(storage.read(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }
}
