// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for a cloud-hosting command-line client.
//!
//! This crate resolves the client's configuration keys (API endpoints, account,
//! group, user, token, debug level and so on) from several ranked layers and
//! records, for every value, which layer supplied it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigVar`,
//!   `Source`, errors) and the `ConfigManager` trait handlers consume
//! - **Ports**: Trait definitions for a readable layer (`ConfigSource`) and a
//!   durable store (`ConfigStore`)
//! - **Adapters**: The in-memory overlay, the configuration directory, the
//!   environment, built-in defaults, flag import and the debug log
//! - **Service**: `Config`, which orchestrates the layers
//!
//! # Precedence
//!
//! 1. The in-memory overlay: flags, prompts and transient sets from this run
//! 2. The configuration directory: one file per persistently-set key
//! 3. The key's `BM_*` environment variable
//! 4. A built-in literal
//!
//! A value present in a higher layer always wins, even when it is empty.
//!
//! # Feature Flags
//!
//! - `cli`: Global flag definitions and flag import via `clap` (default)
//! - `debug-log`: Rotating debug log via `tracing-subscriber` (default)
//!
//! # Quick Start
//!
//! ```rust
//! use bmcfg::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut config = Config::builder()
//!     .with_config_dir(dir.path())
//!     .with_env_values(HashMap::new())
//!     .build()?;
//!
//! config.set_persistent("account", "acme", Source::Interaction)?;
//!
//! let account = config.get_v("account").into_result()?;
//! assert_eq!(account.value.as_str(), "acme");
//! assert_eq!(config.get_group().to_string(), "default.acme");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigManager, ConfigValue, ConfigVar, GroupName, Resolved,
        Result, Source, SourceKind, VirtualMachineName,
    };
    pub use crate::ports::{ConfigSource, ConfigStore};
    pub use crate::service::{Config, ConfigBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    pub use crate::adapters::{DefaultsRegistry, DirectoryAdapter, EnvVarAdapter, OverlayAdapter};
}
