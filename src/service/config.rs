// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration manager implementation.
//!
//! This module provides `Config`, which resolves keys through the in-memory
//! overlay, then the configuration directory, then the built-in defaults, and
//! which is the only writer of the overlay and the directory.

use crate::adapters::{DefaultsRegistry, DirectoryAdapter, EnvVarAdapter, OverlayAdapter};
use crate::domain::{ConfigError, ConfigKey, ConfigManager, ConfigVar, Resolved, Result, Source};
use crate::ports::{ConfigSource, ConfigStore};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The layered configuration manager.
///
/// One `Config` is built at startup and passed to every command handler.
/// Nothing is cached between lookups except what is explicitly set, so a value
/// persisted by one handler is seen by the next.
///
/// # Examples
///
/// ```rust,no_run
/// use bmcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut config = Config::builder().build()?;
/// config.set_persistent("account", "acme", Source::Interaction)?;
/// assert_eq!(config.get("account")?, "acme");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Config {
    /// Values set during this run
    overlay: OverlayAdapter,
    /// Persisted values
    directory: DirectoryAdapter,
    /// Environment and hard-coded defaults
    defaults: DefaultsRegistry,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Opens the configuration in `dir`, or the default location, reading
    /// overrides from the process environment.
    pub fn open(dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(dir) = dir {
            builder = builder.with_config_dir(dir);
        }
        builder.build()
    }

    /// Returns the in-memory overlay.
    pub fn overlay(&self) -> &OverlayAdapter {
        &self.overlay
    }

    /// Records a value entered at an interactive prompt for the rest of this run.
    pub fn set_interactive(&mut self, name: &str, value: &str) {
        self.set(name, value, Source::Interaction);
    }

    /// Copies every flag the user supplied into the overlay.
    ///
    /// Returns the number of flags imported.
    #[cfg(feature = "cli")]
    pub fn import_flags(&mut self, flags: &crate::adapters::CommandLineAdapter) -> usize {
        flags.import_into(&mut self.overlay)
    }

    /// Rotates the previous debug log and sends `tracing` output to a new one
    /// in the configuration directory, at the configured `debug-level`.
    #[cfg(feature = "debug-log")]
    pub fn init_debug_log(&self) -> Result<PathBuf> {
        crate::adapters::debug_log::init(self.directory.dir(), self.get_debug_level())
    }

    /// Renders every recognized key as `name: value (source)`, one per line.
    pub fn describe(&self) -> Result<String> {
        let lines: Vec<String> = self
            .get_all()?
            .iter()
            .map(|var| var.to_string())
            .collect();
        Ok(lines.join("\n"))
    }

    /// Returns the readable layers, highest priority first.
    fn layers(&self) -> Vec<&dyn ConfigSource> {
        let mut layers: Vec<&dyn ConfigSource> = Vec::with_capacity(2);
        layers.push(&self.overlay);
        layers.push(&self.directory);
        layers.sort_by_key(|layer| std::cmp::Reverse(layer.priority()));
        layers
    }

    /// Queries the layers for a value, respecting priority order.
    ///
    /// A layer that fails stops the search; lower layers are not consulted.
    fn query_layers(&self, key: &ConfigKey) -> Result<Option<ConfigVar>> {
        for layer in self.layers() {
            if let Some(var) = layer.get(key)? {
                tracing::debug!("{} found in {} ({})", key, layer.name(), var.source);
                return Ok(Some(var));
            }
        }
        Ok(None)
    }

    /// The bottom of the chain: environment or literal default.
    fn default_for(&self, key: &ConfigKey) -> ConfigVar {
        self.defaults
            .default_with_endpoint(key, || self.get_ignore_err("endpoint"))
    }

    fn require_recognized(&self, name: &str) -> Result<ConfigKey> {
        if !self.defaults.is_recognized(name) {
            return Err(ConfigError::invalid_key(ConfigKey::from(name).into_string()));
        }
        Ok(ConfigKey::from(name))
    }
}

impl ConfigManager for Config {
    fn get_v(&self, name: &str) -> Resolved {
        let key = ConfigKey::from(name);
        match self.query_layers(&key) {
            Ok(Some(var)) => Resolved::ok(var),
            Ok(None) => Resolved::ok(self.default_for(&key)),
            Err(e) => {
                tracing::warn!("Falling back to default for {}: {}", key, e);
                Resolved::degraded(self.default_for(&key), e)
            }
        }
    }

    fn set(&mut self, name: &str, value: &str, source: Source) {
        tracing::debug!("Setting {} for this run ({})", name, source);
        self.overlay.insert(ConfigVar::new(name, value, source));
    }

    fn set_persistent(&mut self, name: &str, value: &str, source: Source) -> Result<()> {
        let key = self.require_recognized(name)?;
        self.set(key.as_str(), value, source);
        // the overlay keeps the new value even if the write fails
        self.directory.write(&key, value)
    }

    fn unset(&mut self, name: &str) -> Result<()> {
        let key = self.require_recognized(name)?;
        self.overlay.remove(&key);
        self.directory.remove(&key)
    }

    fn config_dir(&self) -> &Path {
        self.directory.dir()
    }
}

/// Builder for constructing a `Config`.
///
/// # Examples
///
/// ```rust
/// use bmcfg::prelude::*;
/// use std::collections::HashMap;
///
/// # fn main() -> Result<()> {
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config::builder()
///     .with_config_dir(dir.path())
///     .with_env_values(HashMap::new())
///     .build()?;
/// assert_eq!(config.get("group")?, "default");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    env: EnvVarAdapter,
    #[cfg(feature = "cli")]
    flags: Option<crate::adapters::CommandLineAdapter>,
}

impl ConfigBuilder {
    /// Creates a new builder reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `dir` as the configuration directory, overriding `--config-dir`
    /// and `BM_CONFIG_DIR`.
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Reads environment overrides from the process environment.
    pub fn with_env_vars(mut self) -> Self {
        self.env = EnvVarAdapter::new();
        self
    }

    /// Reads environment overrides from `values` instead of the process
    /// environment.
    pub fn with_env_values(mut self, values: HashMap<String, String>) -> Self {
        self.env = EnvVarAdapter::with_values(values);
        self
    }

    /// Imports these command-line flags into the overlay and honors their
    /// `--config-dir`.
    #[cfg(feature = "cli")]
    pub fn with_flags(mut self, flags: crate::adapters::CommandLineAdapter) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Builds the configuration, creating the configuration directory if it
    /// does not exist yet.
    pub fn build(self) -> Result<Config> {
        #[cfg(feature = "cli")]
        let explicit = self
            .config_dir
            .or_else(|| self.flags.as_ref().and_then(|f| f.config_dir().map(Path::to_path_buf)));
        #[cfg(not(feature = "cli"))]
        let explicit = self.config_dir;

        let dir = DirectoryAdapter::locate(explicit.as_deref(), &self.env)?;
        let directory = DirectoryAdapter::open(dir)?;

        let config = Config {
            overlay: OverlayAdapter::new(),
            directory,
            defaults: DefaultsRegistry::new(self.env),
        };

        #[cfg(feature = "cli")]
        let config = {
            let mut config = config;
            if let Some(flags) = &self.flags {
                let imported = config.import_flags(flags);
                tracing::debug!("Imported {} flags", imported);
            }
            config
        };

        tracing::debug!("Using configuration directory {}", config.config_dir().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::defaults::{DEFAULT_BILLING_ENDPOINT, STAGING_ENDPOINT};
    use std::fs;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir, env: &[(&str, &str)]) -> Config {
        Config::builder()
            .with_config_dir(temp.path())
            .with_env_values(
                env.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_layers_highest_priority_first() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp, &[]);
        let names: Vec<&str> = config.layers().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["overlay", "directory"]);
    }

    #[test]
    fn test_default_when_nothing_set() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp, &[]);
        let var = config.get_v("group").into_result().unwrap();
        assert_eq!(var.value.as_str(), "default");
        assert_eq!(var.source, Source::Code);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp, &[]);
        config.set("Account", "acme", Source::Interaction);
        assert_eq!(config.get("ACCOUNT").unwrap(), "acme");
    }

    #[test]
    fn test_empty_overlay_value_beats_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("account"), "from-file").unwrap();
        let mut config = config_in(&temp, &[]);

        config.set("account", "", Source::Flag("account".into()));
        let var = config.get_v("account").into_result().unwrap();
        assert_eq!(var.value.as_str(), "");
        assert_eq!(var.source, Source::Flag("account".into()));
    }

    #[test]
    fn test_read_failure_degrades_to_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("group")).unwrap();
        let config = config_in(&temp, &[("BM_GROUP", "web")]);

        let resolved = config.get_v("group");
        assert!(matches!(
            resolved.error,
            Some(ConfigError::ReadFailure { .. })
        ));
        assert_eq!(resolved.var.value.as_str(), "web");
        assert_eq!(resolved.var.source, Source::Env("BM_GROUP".into()));

        assert!(config.get("group").is_err());
        assert_eq!(config.get_ignore_err("group"), "web");
    }

    #[test]
    fn test_billing_follows_staging_endpoint_from_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("endpoint"), STAGING_ENDPOINT).unwrap();
        let config = config_in(&temp, &[]);

        let var = config.get_v("billing-endpoint").into_result().unwrap();
        assert_eq!(var.value.as_str(), "");
        assert_eq!(var.source, Source::StagingDefault);
    }

    #[test]
    fn test_billing_file_beats_staging_rule() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp, &[]);
        config.set("endpoint", STAGING_ENDPOINT, Source::Flag("endpoint".into()));
        config
            .set_persistent("billing-endpoint", DEFAULT_BILLING_ENDPOINT, Source::Interaction)
            .unwrap();

        assert_eq!(
            config.get("billing-endpoint").unwrap(),
            DEFAULT_BILLING_ENDPOINT
        );
    }

    #[test]
    fn test_set_persistent_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp, &[]);

        let err = config
            .set_persistent("colour", "blue", Source::Interaction)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { .. }));
        assert!(config.overlay().is_empty());
        assert!(!temp.path().join("colour").exists());
    }

    #[test]
    fn test_set_persistent_write_failure_keeps_overlay() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("token")).unwrap();
        let mut config = config_in(&temp, &[]);

        let err = config
            .set_persistent("token", "abc", Source::Interaction)
            .unwrap_err();
        assert!(matches!(err, ConfigError::WriteFailure { .. }));

        let var = config.get_v("token").var;
        assert_eq!(var.value.as_str(), "abc");
        assert_eq!(var.source, Source::Interaction);
    }

    #[test]
    fn test_set_interactive() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp, &[("BM_USER", "env-user")]);
        config.set_interactive("user", "prompted");

        let var = config.get_v("user").into_result().unwrap();
        assert_eq!(var.value.as_str(), "prompted");
        assert_eq!(var.source, Source::Interaction);
        assert!(!temp.path().join("user").exists());
    }

    #[test]
    fn test_describe_lists_every_key() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp, &[]);
        config.set_interactive("user", "alice");

        let text = config.describe().unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text.contains("user: alice (INTERACTION)"));
        assert!(text.contains("group: default (CODE)"));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_builder_imports_flags_and_config_dir() {
        use crate::adapters::CommandLineAdapter;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("from-flag");
        let dir_arg = dir.to_string_lossy().to_string();
        let flags = CommandLineAdapter::from_args(vec![
            "--config-dir",
            dir_arg.as_str(),
            "--account",
            "acme",
        ])
        .unwrap();

        let config = Config::builder()
            .with_env_values(HashMap::new())
            .with_flags(flags)
            .build()
            .unwrap();

        assert_eq!(config.config_dir(), dir.as_path());
        let var = config.get_v("account").into_result().unwrap();
        assert_eq!(var.value.as_str(), "acme");
        assert_eq!(var.source, Source::Flag("account".into()));
    }

    #[test]
    fn test_build_fails_on_file_in_place_of_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("cfg");
        fs::write(&file, "").unwrap();

        let err = Config::builder()
            .with_config_dir(&file)
            .with_env_values(HashMap::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DirectorySetup { .. }));
    }
}
