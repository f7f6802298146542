// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration manager implementation.
//!
//! This module contains `Config`, the implementation of the `ConfigManager`
//! trait that command handlers are given.

pub mod config;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder};
