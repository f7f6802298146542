// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use bmcfg::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Builds a `Config` over `dir` with a fixed environment instead of the
/// process environment, so tests don't see each other's variables.
#[allow(dead_code)]
pub fn config_in(dir: &Path, env: &[(&str, &str)]) -> Config {
    Config::builder()
        .with_config_dir(dir)
        .with_env_values(env_map(env))
        .build()
        .unwrap()
}

/// Converts `(name, value)` pairs into an environment map.
#[allow(dead_code)]
pub fn env_map(env: &[(&str, &str)]) -> HashMap<String, String> {
    env.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Lists the file names in `dir`, sorted.
#[allow(dead_code)]
pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
