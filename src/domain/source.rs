// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provenance tags for resolved configuration values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which layer produced a configuration value.
///
/// Every resolved value carries one of these. The `Display` form is what a
/// `config` command shows next to each value; code that needs to branch on
/// the layer should match on [`Source::kind`] instead of parsing the string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum Source {
    /// Read from the per-key file at this absolute path.
    File(PathBuf),
    /// Taken from this environment variable.
    Env(String),
    /// A literal built into the client.
    Code,
    /// The billing endpoint is disabled because the primary endpoint is staging.
    StagingDefault,
    /// Set by this command-line flag during the current run.
    Flag(String),
    /// Entered at an interactive prompt during the current run.
    Interaction,
    /// The key is not recognized and nothing supplied a value.
    Unset,
}

/// The category of a [`Source`], without its parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// See [`Source::File`].
    File,
    /// See [`Source::Env`].
    Env,
    /// See [`Source::Code`] and [`Source::StagingDefault`].
    Code,
    /// See [`Source::Flag`].
    Flag,
    /// See [`Source::Interaction`].
    Interaction,
    /// See [`Source::Unset`].
    Unset,
}

impl Source {
    /// Returns the category of this source.
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::File(_) => SourceKind::File,
            Source::Env(_) => SourceKind::Env,
            Source::Code | Source::StagingDefault => SourceKind::Code,
            Source::Flag(_) => SourceKind::Flag,
            Source::Interaction => SourceKind::Interaction,
            Source::Unset => SourceKind::Unset,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "FILE {}", path.display()),
            Source::Env(var) => write!(f, "ENV {}", var),
            Source::Code => write!(f, "CODE"),
            Source::StagingDefault => write!(f, "CODE nullify billing-endpoint on staging"),
            Source::Flag(name) => write!(f, "FLAG {}", name),
            Source::Interaction => write!(f, "INTERACTION"),
            Source::Unset => write!(f, "UNSET"),
        }
    }
}
