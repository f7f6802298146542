// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in defaults for the recognized configuration keys.
//!
//! This is the bottom of the resolution chain. Every recognized key has a
//! default, taken from its environment variable when one is set and from a
//! literal otherwise. Unrecognized names get an empty, unset value rather than
//! an error, so lookups never fail here.

use crate::adapters::EnvVarAdapter;
use crate::domain::{ConfigKey, ConfigVar, Source};

/// The primary API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://uk0.bigv.io";
/// The billing API endpoint.
pub const DEFAULT_BILLING_ENDPOINT: &str = "https://bmbilling.bytemark.co.uk";
/// The authentication endpoint.
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://auth.bytemark.co.uk";
/// The card-submission endpoint used during signup.
pub const DEFAULT_SPP_ENDPOINT: &str = "https://spp-submissions.bytemark.co.uk";
/// The group used when none is configured.
pub const DEFAULT_GROUP: &str = "default";
/// The primary endpoint of the staging environment. Billing is unavailable there.
pub const STAGING_ENDPOINT: &str = "https://int.bigv.io";

/// The source registry: knows which keys exist and what they default to.
///
/// # Examples
///
/// ```rust
/// use bmcfg::adapters::{DefaultsRegistry, EnvVarAdapter};
/// use bmcfg::domain::{ConfigKey, Source};
/// use std::collections::HashMap;
///
/// let registry = DefaultsRegistry::new(EnvVarAdapter::with_values(HashMap::new()));
/// let var = registry.default_for(&ConfigKey::from("group"));
/// assert_eq!(var.value.as_str(), "default");
/// assert_eq!(var.source, Source::Code);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultsRegistry {
    env: EnvVarAdapter,
}

impl DefaultsRegistry {
    /// Creates a registry reading overrides through `env`.
    pub fn new(env: EnvVarAdapter) -> Self {
        Self { env }
    }

    /// Returns `true` if `name` is a recognized key.
    pub fn is_recognized(&self, name: &str) -> bool {
        ConfigKey::from(name).is_recognized()
    }

    /// Returns the hard-coded literal for a recognized key.
    pub fn literal_for(key: &ConfigKey) -> Option<&'static str> {
        let literal = match key.as_str() {
            "endpoint" => DEFAULT_ENDPOINT,
            "billing-endpoint" => DEFAULT_BILLING_ENDPOINT,
            "auth-endpoint" => DEFAULT_AUTH_ENDPOINT,
            "spp-endpoint" => DEFAULT_SPP_ENDPOINT,
            "group" => DEFAULT_GROUP,
            "debug-level" => "0",
            "admin" | "user" | "account" | "token" | "yubikey" => "",
            _ => return None,
        };
        Some(literal)
    }

    /// Returns the default for `key`, judging the staging rule against this
    /// registry's own default endpoint.
    pub fn default_for(&self, key: &ConfigKey) -> ConfigVar {
        self.default_with_endpoint(key, || {
            self.default_for(&ConfigKey::from("endpoint"))
                .value
                .into()
        })
    }

    /// Returns the default for `key`.
    ///
    /// `endpoint` is consulted only for `billing-endpoint` when no environment
    /// override is set: if it yields [`STAGING_ENDPOINT`], the billing endpoint
    /// defaults to empty with [`Source::StagingDefault`].
    pub fn default_with_endpoint<F>(&self, key: &ConfigKey, endpoint: F) -> ConfigVar
    where
        F: FnOnce() -> String,
    {
        let Some(literal) = Self::literal_for(key) else {
            return ConfigVar::new(key.as_str(), "", Source::Unset);
        };

        if let Some((var, value)) = self.env.lookup(key) {
            return ConfigVar::new(key.as_str(), value, Source::Env(var));
        }

        if key.as_str() == "billing-endpoint" && endpoint() == STAGING_ENDPOINT {
            return ConfigVar::new(key.as_str(), "", Source::StagingDefault);
        }

        ConfigVar::new(key.as_str(), literal, Source::Code)
    }
}
