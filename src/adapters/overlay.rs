// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory overlay for values set during the current run.

use crate::domain::{ConfigKey, ConfigVar, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// The process-lifetime overlay.
///
/// Holds values imported from flags, entered at prompts or set transiently by
/// command handlers. It is never flushed anywhere; only explicit persistent
/// writes survive the process.
///
/// # Priority
///
/// The overlay has the highest priority (2). An entry here wins over the
/// configuration directory even when its value is empty.
#[derive(Debug, Clone, Default)]
pub struct OverlayAdapter {
    values: HashMap<ConfigKey, ConfigVar>,
}

impl OverlayAdapter {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `var`'s key.
    pub fn insert(&mut self, var: ConfigVar) {
        self.values.insert(var.key(), var);
    }

    /// Removes the entry for `key`, returning it if there was one.
    pub fn remove(&mut self, key: &ConfigKey) -> Option<ConfigVar> {
        self.values.remove(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for OverlayAdapter {
    fn name(&self) -> &str {
        "overlay"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigVar>> {
        Ok(self.values.get(key).cloned())
    }
}
