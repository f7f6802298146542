// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with narrow coercion helpers.
//!
//! Every configuration value is stored as a string, because that is what the
//! user typed into a flag, an environment variable or a file. Callers that need
//! a boolean or a number go through the helpers here so the parsing rules live
//! in one place.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An untyped configuration value.
///
/// # Examples
///
/// ```
/// use bmcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("2");
/// assert_eq!(value.as_i32("debug-level").unwrap(), 2);
/// assert!(value.as_bool());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets the value as a boolean.
    ///
    /// A value is true unless it is empty or literally `"false"`. There is no
    /// failure case: `"no"` and `"0"` are both true.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmcfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("true").as_bool());
    /// assert!(ConfigValue::from("yes").as_bool());
    /// assert!(!ConfigValue::from("false").as_bool());
    /// assert!(!ConfigValue::from("").as_bool());
    /// ```
    pub fn as_bool(&self) -> bool {
        !self.0.is_empty() && self.0 != "false"
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, key: &str) -> Result<i32> {
        self.0
            .trim()
            .parse::<i32>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_as_bool_truthy() {
        for val in ["true", "True", "1", "0", "no", "off", " "] {
            assert!(ConfigValue::from(val).as_bool(), "Failed for value: {:?}", val);
        }
    }

    #[test]
    fn test_as_bool_falsy() {
        assert!(!ConfigValue::from("").as_bool());
        assert!(!ConfigValue::from("false").as_bool());
    }

    #[test]
    fn test_as_bool_is_case_sensitive() {
        // only the exact literal disables a switch
        assert!(ConfigValue::from("FALSE").as_bool());
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(ConfigValue::from("42").as_i32("debug-level").unwrap(), 42);
        assert_eq!(ConfigValue::from(" -3 ").as_i32("debug-level").unwrap(), -3);
    }

    #[test]
    fn test_as_i32_invalid() {
        let err = ConfigValue::from("loud").as_i32("debug-level").unwrap_err();
        assert!(err.to_string().contains("debug-level"));
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn test_parse_custom_type() {
        let ip: IpAddr = ConfigValue::from("127.0.0.1").parse("endpoint").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");
        assert!(ConfigValue::from("nope").parse::<IpAddr>("endpoint").is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let value = ConfigValue::default();
        assert!(value.is_empty());
        assert_eq!(value.as_str(), "");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let value = ConfigValue::from("  spaces  ");
        assert_eq!(value.as_str(), "  spaces  ");
    }
}
