// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line flag import.
//!
//! This module defines the global flags that mirror configuration keys and
//! copies the ones the user actually supplied into the in-memory overlay. The
//! import walks a fixed list of flag names once at startup.

use crate::adapters::OverlayAdapter;
use crate::domain::{ConfigVar, Source};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

/// Flag selecting the configuration directory. It is not a configuration key.
pub const CONFIG_DIR_FLAG: &str = "config-dir";

/// Keys that can be set from the command line, in import order.
///
/// `token` is deliberately absent so it never appears in process listings.
pub const FLAG_KEYS: [&str; 10] = [
    "endpoint",
    "billing-endpoint",
    "auth-endpoint",
    "spp-endpoint",
    "admin",
    "user",
    "account",
    "group",
    "debug-level",
    "yubikey",
];

/// Keys whose flags are switches that take no value.
pub const SWITCH_KEYS: [&str; 2] = ["admin", "yubikey"];

/// Returns the global flag definitions, for attaching to a command tree.
///
/// # Examples
///
/// ```rust
/// use bmcfg::adapters::cli::global_args;
/// use clap::Command;
///
/// let cmd = Command::new("bm").args(global_args());
/// let matches = cmd.try_get_matches_from(["bm", "--account", "acme"]).unwrap();
/// assert_eq!(matches.get_one::<String>("account").unwrap(), "acme");
/// ```
pub fn global_args() -> Vec<Arg> {
    let mut args = vec![Arg::new(CONFIG_DIR_FLAG)
        .long(CONFIG_DIR_FLAG)
        .value_name("DIR")
        .global(true)
        .help("Directory holding persisted configuration")];

    for key in FLAG_KEYS {
        let arg = Arg::new(key).long(key).global(true);
        let arg = if SWITCH_KEYS.contains(&key) {
            arg.action(ArgAction::SetTrue)
        } else {
            arg.action(ArgAction::Set).value_name("VALUE")
        };
        args.push(arg.help(format!("Override the {} configuration value", key)));
    }
    args
}

/// Flags captured from one command-line invocation.
///
/// # Examples
///
/// ```rust
/// use bmcfg::adapters::CommandLineAdapter;
///
/// let flags = CommandLineAdapter::from_args(vec!["--group", "web", "--yubikey"]).unwrap();
/// assert_eq!(flags.get("group"), Some("web"));
/// assert_eq!(flags.get("yubikey"), Some("true"));
/// assert_eq!(flags.get("account"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Value of `--config-dir`, if given
    config_dir: Option<PathBuf>,
    /// Supplied flags, in [`FLAG_KEYS`] order
    values: Vec<(String, String)>,
}

impl CommandLineAdapter {
    /// Creates an adapter with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the configuration flags from parsed matches.
    ///
    /// Only flags given on the command line are captured; a switch left at its
    /// implicit `false` is not. Matches from a command that lacks some of the
    /// [`global_args`] are accepted, and the missing flags are skipped.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut adapter = Self::new();

        if supplied(matches, CONFIG_DIR_FLAG) {
            adapter.config_dir = matches
                .try_get_one::<String>(CONFIG_DIR_FLAG)
                .ok()
                .flatten()
                .map(PathBuf::from);
        }

        for key in FLAG_KEYS {
            if !supplied(matches, key) {
                continue;
            }
            let value = if SWITCH_KEYS.contains(&key) {
                matches
                    .try_get_one::<bool>(key)
                    .ok()
                    .flatten()
                    .map(|b| b.to_string())
            } else {
                matches.try_get_one::<String>(key).ok().flatten().cloned()
            };
            if let Some(value) = value {
                adapter.values.push((key.to_string(), value));
            }
        }

        adapter
    }

    /// Parses a list of arguments (without the program name).
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Result<Self, clap::Error> {
        let argv = std::iter::once("bm".to_string())
            .chain(args.iter().map(|a| a.as_ref().to_string()));
        let matches = Command::new("bm")
            .args(global_args())
            .try_get_matches_from(argv)?;
        Ok(Self::from_matches(&matches))
    }

    /// Returns the value of `--config-dir`, if given.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Returns the supplied value for a flag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every supplied flag and its value.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every supplied flag into `overlay`, tagged with the flag name.
    ///
    /// Returns the number of flags imported.
    pub fn import_into(&self, overlay: &mut OverlayAdapter) -> usize {
        for (key, value) in &self.values {
            tracing::debug!("Importing flag --{}", key);
            overlay.insert(ConfigVar::new(
                key.as_str(),
                value.as_str(),
                Source::Flag(key.clone()),
            ));
        }
        self.values.len()
    }
}

fn supplied(matches: &ArgMatches, id: &str) -> bool {
    // value_source is only safe to ask about ids the command defines
    matches.try_contains_id(id).unwrap_or(false)
        && matches!(matches.value_source(id), Some(ValueSource::CommandLine))
}
