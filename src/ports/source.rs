// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the read side of a single
//! configuration layer. The resolver asks each layer in priority order and
//! stops at the first one that has a value.

use crate::domain::{ConfigKey, ConfigVar, Result};

/// A single layer of configuration.
///
/// # Priority
///
/// Each source has a priority value (0-255). Higher priority values take
/// precedence over lower ones. The layers shipped with this crate use:
///
/// - **2 (highest)**: the in-memory overlay
/// - **1**: the configuration directory
///
/// Hard-coded and environment defaults are not a layer; they are what
/// resolution falls back to when no layer has a value.
///
/// # Examples
///
/// ```rust
/// use bmcfg::ports::ConfigSource;
/// use bmcfg::domain::{ConfigKey, ConfigVar, Result, Source};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigVar>> {
///         Ok(Some(ConfigVar::new(key.as_str(), "42", Source::Code)))
///     }
/// }
///
/// let var = Fixed.get_str("debug-level").unwrap().unwrap();
/// assert_eq!(var.value.as_str(), "42");
/// ```
pub trait ConfigSource {
    /// Returns the name of this layer, used in log messages.
    fn name(&self) -> &str;

    /// Returns the priority of this layer.
    fn priority(&self) -> u8;

    /// Retrieves the entry for the given key.
    ///
    /// Returns `Ok(Some(var))` if this layer holds a value (even an empty one),
    /// `Ok(None)` if it does not, or `Err` if the layer's storage exists but
    /// could not be read.
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigVar>>;

    /// Retrieves the entry for the given key string.
    fn get_str(&self, key: &str) -> Result<Option<ConfigVar>> {
        self.get(&ConfigKey::from(key))
    }
}
