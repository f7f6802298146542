// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent configuration store trait definition.

use crate::domain::{ConfigKey, Result};
use std::path::PathBuf;

/// The durable side of configuration: somewhere values survive a restart.
///
/// Implementations do not validate keys; callers check
/// [`ConfigKey::is_recognized`] first.
pub trait ConfigStore {
    /// Returns where the value for `key` lives.
    fn path_for(&self, key: &ConfigKey) -> PathBuf;

    /// Replaces the stored value for `key`.
    fn write(&self, key: &ConfigKey, value: &str) -> Result<()>;

    /// Deletes the stored value for `key`. Deleting a missing value succeeds.
    fn remove(&self, key: &ConfigKey) -> Result<()>;
}
