// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure is returned to the caller as a value. Converting these into an
//! exit code and a message is the job of the command layer, which is why the
//! variants carry the key and path a user needs to fix the problem.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use bmcfg::domain::errors::ConfigError;
///
/// let err = ConfigError::invalid_key("colour");
/// assert!(err.to_string().contains("colour"));
/// assert!(err.to_string().contains("account"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A mutation named a key outside the recognized set.
    #[error("{} is not a valid configuration key; valid keys are: {}", .key, .valid.join(", "))]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Every recognized key, for display
        valid: Vec<String>,
    },

    /// A per-key file exists but could not be read.
    #[error("Couldn't read config for {} from {}: {}", .key, .path.display(), .source)]
    ReadFailure {
        /// The key being read
        key: String,
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A persistent write failed.
    #[error("Couldn't write config for {} to {}: {}", .key, .path.display(), .source)]
    WriteFailure {
        /// The key being written
        key: String,
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A per-key file exists but could not be removed.
    #[error("Couldn't remove config for {} at {}: {}", .key, .path.display(), .source)]
    RemoveFailure {
        /// The key being unset
        key: String,
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration directory could not be created or is not a directory.
    #[error("Configuration directory {} is unusable: {}", .path.display(), .message)]
    DirectorySetup {
        /// The directory path
        path: PathBuf,
        /// What went wrong
        message: String,
        /// The underlying I/O error, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The debug log could not be rotated or opened.
    #[error("Couldn't set up debug log at {}: {}", .path.display(), .source)]
    LogSetup {
        /// The log file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates an `InvalidKey` error listing every recognized key.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        ConfigError::InvalidKey {
            key: key.into(),
            valid: crate::domain::KNOWN_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns the key this error concerns, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidKey { key, .. }
            | ConfigError::ReadFailure { key, .. }
            | ConfigError::WriteFailure { key, .. }
            | ConfigError::RemoveFailure { key, .. }
            | ConfigError::TypeConversionError { key, .. } => Some(key),
            ConfigError::DirectorySetup { .. } | ConfigError::LogSetup { .. } => None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
