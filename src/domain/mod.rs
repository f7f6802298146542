// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types of the configuration crate: keys,
//! values, provenance, resolved entries, resource names and errors. It is
//! independent of the filesystem and the process environment.

pub mod config_key;
pub mod config_value;
pub mod config_var;
pub mod errors;
pub mod names;
pub mod service;
pub mod source;

// Re-export commonly used types
pub use config_key::{ConfigKey, ENV_PREFIX, KNOWN_KEYS};
pub use config_value::ConfigValue;
pub use config_var::ConfigVar;
pub use errors::{ConfigError, Result};
pub use names::{GroupName, VirtualMachineName};
pub use service::{ConfigManager, Resolved};
pub use source::{Source, SourceKind};
