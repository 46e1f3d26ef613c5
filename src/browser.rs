//! Browser Adapters
//!
//! Implementations of the core ports backed by web APIs:
//! localStorage, timers, media queries and the document root.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use catalog_core::{Clock, StorageError, StoragePort, Theme};

/// window.localStorage; reads fail soft, writes report why they failed
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn is_available() -> bool {
        Self::local().is_some()
    }
}

impl StoragePort for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// setTimeout-backed sleep
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

pub fn system_prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Swap the `dark`/`light` class on <html>
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2("dark", "light");
    let _ = classes.add_1(theme.as_str());
}
