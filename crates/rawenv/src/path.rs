//! Path helpers for env file locations.
//!
//! Responsibilities:
//! - Provide the default env file path.
//! - Resolve the directory a relative env path is interpreted against.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Error reporting to callers (see loader/error.rs).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::DEFAULT_ENV_FILE;

/// Returns the default env file path: the bare literal `.env`.
///
/// The path is deliberately left relative; the OS resolves it against the
/// current working directory at open time, so a loader built once still
/// follows a later `chdir`.
pub(crate) fn default_env_path() -> PathBuf {
    PathBuf::from(DEFAULT_ENV_FILE)
}

/// Returns the directory a relative env path resolves against.
pub(crate) fn working_dir() -> Result<PathBuf, anyhow::Error> {
    std::env::current_dir().context("Failed to determine current working directory")
}
