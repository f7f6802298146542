// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rolling debug log kept in the configuration directory.
//!
//! Each run writes `debug.log`. Before it is opened, the previous run's log is
//! moved to `debug.log.1`, replacing whatever was there, so two runs of history
//! are kept at most.

use crate::domain::{ConfigError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

/// File name of the current run's log.
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// File name the previous run's log is rotated to.
pub const ROTATED_LOG_FILE: &str = "debug.log.1";

/// Moves `debug.log` to `debug.log.1` if it exists.
///
/// Returns the path of the (now absent) current log.
pub fn rotate(dir: &Path) -> Result<PathBuf> {
    let current = dir.join(DEBUG_LOG_FILE);
    let rotated = dir.join(ROTATED_LOG_FILE);

    match fs::rename(&current, &rotated) {
        Ok(()) => {
            tracing::debug!(
                old_path = %current.display(),
                new_path = %rotated.display(),
                "rotated debug log"
            );
            Ok(current)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(current),
        Err(e) => Err(ConfigError::LogSetup {
            path: rotated,
            source: e,
        }),
    }
}

/// Rotates the previous log and creates a fresh one.
pub fn open(dir: &Path) -> Result<(File, PathBuf)> {
    let path = rotate(dir)?;
    let file = File::create(&path).map_err(|e| ConfigError::LogSetup {
        path: path.clone(),
        source: e,
    })?;
    Ok((file, path))
}

/// Maps the `debug-level` configuration value to a log verbosity.
pub fn level_for(debug_level: i32) -> LevelFilter {
    match debug_level {
        i32::MIN..=0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Opens a fresh debug log in `dir` and routes `tracing` output to it.
///
/// If a global subscriber is already installed (tests re-running the client
/// in one process do this), the log file is still rotated and created but the
/// existing subscriber is kept.
pub fn init(dir: &Path, debug_level: i32) -> Result<PathBuf> {
    let (file, path) = open(dir)?;

    let installed = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level_for(debug_level))
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
    Ok(path)
}
