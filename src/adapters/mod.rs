// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration layer implementations.
//!
//! This module contains the concrete implementations of the traits defined in
//! the ports layer, plus the environment and defaults lookups that sit at the
//! bottom of the resolution chain.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "debug-log")]
pub mod debug_log;
pub mod defaults;
pub mod directory;
pub mod env_var;
pub mod overlay;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
pub use defaults::DefaultsRegistry;
pub use directory::DirectoryAdapter;
pub use env_var::EnvVarAdapter;
pub use overlay::OverlayAdapter;
