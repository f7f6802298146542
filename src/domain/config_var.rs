// SPDX-License-Identifier: MIT OR Apache-2.0

//! A resolved configuration entry: name, value and provenance.

use crate::domain::{ConfigKey, ConfigValue, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value together with the key it belongs to and the layer
/// that produced it.
///
/// # Examples
///
/// ```
/// use bmcfg::domain::{ConfigVar, Source};
///
/// let var = ConfigVar::new("account", "acme", Source::Flag("account".into()));
/// assert_eq!(var.value.as_str(), "acme");
/// assert_eq!(var.to_string(), "account: acme (FLAG account)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigVar {
    /// The canonical key name.
    pub name: String,
    /// The resolved value.
    pub value: ConfigValue,
    /// Where the value came from.
    pub source: Source,
}

impl ConfigVar {
    /// Creates a new entry, normalizing the key name.
    pub fn new(name: impl Into<String>, value: impl Into<ConfigValue>, source: Source) -> Self {
        Self {
            name: ConfigKey::new(name.into()).into_string(),
            value: value.into(),
            source,
        }
    }

    /// Returns the key this entry belongs to.
    pub fn key(&self) -> ConfigKey {
        ConfigKey::from(self.name.as_str())
    }
}

impl fmt::Display for ConfigVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.value, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_name() {
        let var = ConfigVar::new("Debug-Level", "1", Source::Code);
        assert_eq!(var.name, "debug-level");
        assert_eq!(var.key(), ConfigKey::from("debug-level"));
    }

    #[test]
    fn test_display_with_empty_value() {
        let var = ConfigVar::new("token", "", Source::Code);
        assert_eq!(var.to_string(), "token:  (CODE)");
    }
}
