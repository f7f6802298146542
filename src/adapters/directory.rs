// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration directory adapter.
//!
//! This module provides the on-disk layer: a directory holding one file per
//! persistently-set key, named exactly after the key, whose trimmed contents
//! are the value.

use crate::adapters::EnvVarAdapter;
use crate::domain::{ConfigError, ConfigKey, ConfigVar, Result, Source};
use crate::ports::{ConfigSource, ConfigStore};
use directories::BaseDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "BM_CONFIG_DIR";

/// Name of the configuration directory under the user's home.
pub const DEFAULT_DIR_NAME: &str = ".bytemark";

/// Configuration source and store backed by a directory of per-key files.
///
/// # Priority
///
/// The directory has a priority of 1: it is overridden by the in-memory overlay
/// and overrides the environment and built-in defaults.
///
/// # Examples
///
/// ```rust,no_run
/// use bmcfg::adapters::{DirectoryAdapter, EnvVarAdapter};
/// use bmcfg::ports::ConfigSource;
///
/// let dir = DirectoryAdapter::locate(None, &EnvVarAdapter::new()).unwrap();
/// let adapter = DirectoryAdapter::open(dir).unwrap();
/// let account = adapter.get_str("account").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryAdapter {
    /// Absolute path of the configuration directory
    dir: PathBuf,
}

impl DirectoryAdapter {
    /// Picks the configuration directory.
    ///
    /// An explicit directory wins, then `BM_CONFIG_DIR` if set and non-empty, then
    /// `.bytemark` under the user's home directory.
    pub fn locate(explicit: Option<&Path>, env: &EnvVarAdapter) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }

        if let Some(dir) = env.var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let base = BaseDirs::new().ok_or_else(|| ConfigError::DirectorySetup {
            path: PathBuf::from("~").join(DEFAULT_DIR_NAME),
            message: "Failed to determine home directory".to_string(),
            source: None,
        })?;
        Ok(base.home_dir().join(DEFAULT_DIR_NAME))
    }

    /// Opens the configuration directory, creating it if necessary.
    ///
    /// Fails with [`ConfigError::DirectorySetup`] if something other than a
    /// directory exists at `dir` or the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| ConfigError::DirectorySetup {
                    path: dir.to_path_buf(),
                    message: "Failed to determine current directory".to_string(),
                    source: Some(e),
                })?
                .join(dir)
        };

        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ConfigError::DirectorySetup {
                    path: dir,
                    message: "not a directory".to_string(),
                    source: None,
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                create_private_dir(&dir).map_err(|e| ConfigError::DirectorySetup {
                    path: dir.clone(),
                    message: "Failed to create directory".to_string(),
                    source: Some(e),
                })?;
                tracing::debug!("Created configuration directory {}", dir.display());
            }
            Err(e) => {
                return Err(ConfigError::DirectorySetup {
                    path: dir,
                    message: "Failed to inspect directory".to_string(),
                    source: Some(e),
                })
            }
        }

        Ok(Self { dir })
    }

    /// Returns the configuration directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads a value file as raw bytes. Invalid UTF-8 is replaced rather than
    /// rejected, so only real I/O faults surface as errors.
    fn read_value(path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

impl ConfigSource for DirectoryAdapter {
    fn name(&self) -> &str {
        "directory"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigVar>> {
        // only recognized keys map to files; this keeps names like "../x" off disk
        if !key.is_recognized() {
            return Ok(None);
        }

        let path = self.path_for(key);
        match Self::read_value(&path) {
            Ok(value) => Ok(Some(ConfigVar::new(key.as_str(), value, Source::File(path)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::ReadFailure {
                key: key.as_str().to_string(),
                path,
                source: e,
            }),
        }
    }
}

impl ConfigStore for DirectoryAdapter {
    fn path_for(&self, key: &ConfigKey) -> PathBuf {
        self.dir.join(key.as_str())
    }

    fn write(&self, key: &ConfigKey, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| ConfigError::WriteFailure {
            key: key.as_str().to_string(),
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!("Wrote {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &ConfigKey) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::RemoveFailure {
                key: key.as_str().to_string(),
                path,
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> EnvVarAdapter {
        EnvVarAdapter::with_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_directory_name_and_priority() {
        let temp = TempDir::new().unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();
        assert_eq!(adapter.name(), "directory");
        assert_eq!(adapter.priority(), 1);
    }

    #[test]
    fn test_locate_explicit_beats_env() {
        let env = env(&[(CONFIG_DIR_ENV, "/from/env")]);
        let dir = DirectoryAdapter::locate(Some(Path::new("/explicit")), &env).unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));

        let dir = DirectoryAdapter::locate(None, &env).unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_locate_defaults_under_home() {
        let env = env(&[(CONFIG_DIR_ENV, "")]);
        if let Ok(dir) = DirectoryAdapter::locate(None, &env) {
            assert!(dir.ends_with(DEFAULT_DIR_NAME));
        }
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let adapter = DirectoryAdapter::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(adapter.dir(), nested.as_path());
    }

    #[test]
    fn test_open_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let err = DirectoryAdapter::open(&file).unwrap_err();
        assert!(matches!(err, ConfigError::DirectorySetup { .. }));
    }

    #[test]
    fn test_get_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();
        assert!(adapter.get_str("account").unwrap().is_none());
    }

    #[test]
    fn test_get_trims_contents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("account"), "  acme\n\n").unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();

        let var = adapter.get_str("account").unwrap().unwrap();
        assert_eq!(var.value.as_str(), "acme");
        assert_eq!(var.source, Source::File(temp.path().join("account")));
    }

    #[test]
    fn test_get_non_utf8_contents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("account"), b"caf\xe9\n").unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();

        let var = adapter.get_str("account").unwrap().unwrap();
        assert_eq!(var.value.as_str(), "caf\u{fffd}");
        assert_eq!(var.source, Source::File(temp.path().join("account")));
    }

    #[test]
    fn test_get_large_file_is_read() {
        let temp = TempDir::new().unwrap();
        let value = "x".repeat(2 * 1024 * 1024);
        fs::write(temp.path().join("token"), &value).unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();

        let var = adapter.get_str("token").unwrap().unwrap();
        assert_eq!(var.value.as_str().len(), value.len());
    }

    #[test]
    fn test_get_ignores_unrecognized_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("colour"), "blue").unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();
        assert!(adapter.get_str("colour").unwrap().is_none());
    }

    #[test]
    fn test_get_unreadable_is_read_failure() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("group")).unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();

        match adapter.get_str("group") {
            Err(ConfigError::ReadFailure { key, path, .. }) => {
                assert_eq!(key, "group");
                assert_eq!(path, temp.path().join("group"));
            }
            other => panic!("expected read failure, got {:?}", other),
        }
    }

    #[test]
    fn test_write_truncates() {
        let temp = TempDir::new().unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();
        let key = ConfigKey::from("endpoint");

        adapter.write(&key, "https://a-much-longer-value.test").unwrap();
        adapter.write(&key, "https://b.test").unwrap();
        let contents = fs::read_to_string(temp.path().join("endpoint")).unwrap();
        assert_eq!(contents, "https://b.test");
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("token")).unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();

        let err = adapter.write(&ConfigKey::from("token"), "t").unwrap_err();
        match err {
            ConfigError::WriteFailure { key, path, .. } => {
                assert_eq!(key, "token");
                assert_eq!(path, temp.path().join("token"));
            }
            other => panic!("expected write failure, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let adapter = DirectoryAdapter::open(temp.path()).unwrap();
        let key = ConfigKey::from("user");

        adapter.write(&key, "alice").unwrap();
        adapter.remove(&key).unwrap();
        assert!(!temp.path().join("user").exists());
        adapter.remove(&key).unwrap();
    }
}
