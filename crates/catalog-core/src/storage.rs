//! Storage Port
//!
//! Durable key-value storage behind a two-method interface so preference
//! logic runs without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

pub trait StoragePort {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and for browsers without localStorage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, as if written by an earlier session
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
