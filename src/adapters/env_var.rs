// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable lookups.
//!
//! This module provides the adapter that the defaults registry and the
//! directory locator use to read the process environment.

use crate::domain::ConfigKey;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Reads key-specific environment variables.
///
/// Each recognized key has one variable, named by
/// [`ConfigKey::env_var_name`]: `account` is overridden by `BM_ACCOUNT`.
/// Lookups are made on demand so a variable changed mid-process is seen by
/// the next resolution.
///
/// # Examples
///
/// ```rust
/// use bmcfg::adapters::EnvVarAdapter;
/// use bmcfg::domain::ConfigKey;
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("BM_ACCOUNT".to_string(), "acme".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
///
/// let (var, value) = adapter.lookup(&ConfigKey::from("account")).unwrap();
/// assert_eq!(var, "BM_ACCOUNT");
/// assert_eq!(value, "acme");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Fixed values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter that reads the process environment.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for tests that need a
    /// hermetic environment. Variables not in `values` are treated as unset.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Returns the value of an arbitrary environment variable.
    ///
    /// Unset and empty variables, variables that are not valid unicode and
    /// oversized values are all reported as `None`.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match &self.values {
            Some(values) => values.get(name).cloned(),
            None => env::var(name).ok(),
        }
        .filter(|v| !v.is_empty())?;

        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable {}: value_len={} (max={})",
                name,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return None;
        }
        Some(value)
    }

    /// Looks up the variable for `key`, returning its name and value.
    pub fn lookup(&self, key: &ConfigKey) -> Option<(String, String)> {
        let name = key.env_var_name();
        self.var(&name).map(|value| (name, value))
    }
}
