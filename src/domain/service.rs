// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration manager trait definition.
//!
//! This module defines the `ConfigManager` trait, the interface command handlers
//! use to read and change configuration. Handlers receive an implementation
//! explicitly; there is no global configuration object.

use crate::domain::{
    ConfigError, ConfigKey, ConfigValue, ConfigVar, GroupName, Result, Source,
    VirtualMachineName,
};
use std::path::Path;

/// The outcome of resolving a single key.
///
/// Resolution always produces a usable value. When the on-disk layer exists but
/// cannot be read, `error` is set and `var` holds the fallback default, so a
/// caller that ignores the error still gets something sensible.
#[derive(Debug)]
pub struct Resolved {
    /// The resolved entry, or the fallback default when `error` is set.
    pub var: ConfigVar,
    /// The read failure encountered on the way, if any.
    pub error: Option<ConfigError>,
}

impl Resolved {
    /// A resolution that met no errors.
    pub fn ok(var: ConfigVar) -> Self {
        Self { var, error: None }
    }

    /// A resolution that fell back to `var` after `error`.
    pub fn degraded(var: ConfigVar, error: ConfigError) -> Self {
        Self {
            var,
            error: Some(error),
        }
    }

    /// Converts into a `Result`, dropping the fallback value on error.
    pub fn into_result(self) -> Result<ConfigVar> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.var),
        }
    }
}

/// The main configuration interface consumed by command handlers.
///
/// Implementors provide [`get_v`](ConfigManager::get_v) and the three
/// mutation methods; every other lookup is derived from them.
///
/// # Examples
///
/// ```rust
/// use bmcfg::domain::{ConfigManager, ConfigVar, Resolved, Result, Source};
/// use std::collections::HashMap;
/// use std::path::{Path, PathBuf};
///
/// struct MemoryConfig(HashMap<String, ConfigVar>, PathBuf);
///
/// impl ConfigManager for MemoryConfig {
///     fn get_v(&self, name: &str) -> Resolved {
///         let var = self.0.get(name).cloned()
///             .unwrap_or_else(|| ConfigVar::new(name, "", Source::Unset));
///         Resolved::ok(var)
///     }
///     fn set(&mut self, name: &str, value: &str, source: Source) {
///         self.0.insert(name.to_string(), ConfigVar::new(name, value, source));
///     }
///     fn set_persistent(&mut self, name: &str, value: &str, source: Source) -> Result<()> {
///         self.set(name, value, source);
///         Ok(())
///     }
///     fn unset(&mut self, name: &str) -> Result<()> {
///         self.0.remove(name);
///         Ok(())
///     }
///     fn config_dir(&self) -> &Path {
///         &self.1
///     }
/// }
///
/// let mut config = MemoryConfig(HashMap::new(), PathBuf::from("/tmp"));
/// config.set("group", "web", Source::Interaction);
/// assert_eq!(config.get_group().group, "web");
/// ```
pub trait ConfigManager {
    /// Resolves a key to its value and provenance.
    fn get_v(&self, name: &str) -> Resolved;

    /// Sets a value for the rest of this process only.
    ///
    /// No validation is performed, so any name may be used for bookkeeping.
    fn set(&mut self, name: &str, value: &str, source: Source);

    /// Sets a value for this process and writes it to the configuration
    /// directory.
    ///
    /// The in-memory value is updated even when the write fails.
    fn set_persistent(&mut self, name: &str, value: &str, source: Source) -> Result<()>;

    /// Removes any in-memory and persisted value for a key.
    fn unset(&mut self, name: &str) -> Result<()>;

    /// Returns the configuration directory in use.
    fn config_dir(&self) -> &Path;

    /// Resolves a key to its string value, reporting read failures.
    fn get(&self, name: &str) -> Result<String> {
        self.get_v(name).into_result().map(|var| var.value.into())
    }

    /// Resolves a key to its string value, ignoring read failures.
    fn get_ignore_err(&self, name: &str) -> String {
        self.get_v(name).var.value.into()
    }

    /// Resolves every recognized key, in enumeration order.
    ///
    /// Stops at the first key whose resolution reports an error.
    fn get_all(&self) -> Result<Vec<ConfigVar>> {
        ConfigKey::known()
            .map(|key| self.get_v(key.as_str()).into_result())
            .collect()
    }

    /// Resolves a key as a boolean: true unless empty or `"false"`.
    fn get_bool(&self, name: &str) -> bool {
        self.get_v(name).var.value.as_bool()
    }

    /// Returns the configured debug level, or 0 if it isn't a number.
    fn get_debug_level(&self) -> i32 {
        let value: ConfigValue = self.get_v("debug-level").var.value;
        value.as_i32("debug-level").unwrap_or(0)
    }

    /// Returns the default group: the configured group in the configured account.
    fn get_group(&self) -> GroupName {
        GroupName::new(self.get_ignore_err("group"), self.get_ignore_err("account"))
    }

    /// Returns the default virtual machine target: the default group with an
    /// empty machine name, for commands to fill in.
    fn get_virtual_machine(&self) -> VirtualMachineName {
        VirtualMachineName::from(self.get_group())
    }
}
