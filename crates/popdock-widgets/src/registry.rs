#![forbid(unsafe_code)]

//! The open-key registry backing the singleton-per-key guarantee.
//!
//! One entry per dedup key, toggled between open and closed and never
//! removed. The registry is a plain value owned by the manager; its
//! lifetime is the manager's lifetime, so dropping the manager cannot leak
//! open flags into anything else.

use std::collections::HashMap;

/// Mapping from dedup key to an "is open" flag.
#[derive(Debug, Default, Clone)]
pub struct OpenRegistry {
    slots: HashMap<String, bool>,
}

impl OpenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the key currently holds an open dialog.
    ///
    /// Keys never seen before read as closed.
    pub fn is_open(&self, key: &str) -> bool {
        self.slots.get(key).copied().unwrap_or(false)
    }

    /// Flag the key as open.
    pub fn set_open(&mut self, key: &str) {
        self.slots.insert(key.to_owned(), true);
    }

    /// Flag the key as closed. The entry stays in the map.
    pub fn set_closed(&mut self, key: &str) {
        self.slots.insert(key.to_owned(), false);
    }

    /// Number of keys ever registered (open or closed).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no key was ever registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
