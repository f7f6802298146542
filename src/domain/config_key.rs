// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype and the closed set of recognized keys.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! that normalizes key names on construction so that `Account` and `account`
//! address the same entry in every layer.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Prefix shared by every key-specific environment variable.
pub const ENV_PREFIX: &str = "BM_";

/// The recognized configuration keys, in their stable enumeration order.
///
/// Only these keys may be persisted or unset. Lookups of any other name are
/// allowed but resolve to an unset value.
pub const KNOWN_KEYS: [&str; 11] = [
    "endpoint",
    "billing-endpoint",
    "auth-endpoint",
    "spp-endpoint",
    "admin",
    "user",
    "account",
    "group",
    "token",
    "debug-level",
    "yubikey",
];

/// A normalized configuration key.
///
/// Keys are trimmed and lower-cased when created, so the in-memory overlay,
/// the on-disk file and the environment variable derived from a key all agree
/// on a single canonical spelling.
///
/// # Examples
///
/// ```
/// use bmcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from(" Billing-Endpoint ");
/// assert_eq!(key.as_str(), "billing-endpoint");
/// assert!(key.is_recognized());
/// assert_eq!(key.env_var_name(), "BM_BILLING_ENDPOINT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`, normalizing it.
    pub fn new(key: String) -> Self {
        ConfigKey(key.trim().to_lowercase())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if this key is one of [`KNOWN_KEYS`].
    pub fn is_recognized(&self) -> bool {
        KNOWN_KEYS.contains(&self.0.as_str())
    }

    /// Returns the name of the environment variable that overrides this key's
    /// default, e.g. `BM_DEBUG_LEVEL` for `debug-level`.
    pub fn env_var_name(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.0.to_uppercase().replace('-', "_"))
    }

    /// Returns every recognized key in enumeration order.
    pub fn known() -> impl Iterator<Item = ConfigKey> {
        KNOWN_KEYS.iter().map(|k| ConfigKey::from(*k))
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
