// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the layered resolver
//! talks to. These traits are implemented by adapters in the adapters layer.

pub mod source;
pub mod store;

// Re-export commonly used types
pub use source::ConfigSource;
pub use store::ConfigStore;
