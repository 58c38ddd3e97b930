//! Loader for raw env file contents.
//!
//! Responsibilities:
//! - Load the full contents of an env file into a `String` in one bulk read.
//! - Provide the lenient degrade-to-empty API (`load`) and the strict
//!   `Result` API (`try_load`).
//!
//! Does NOT handle:
//! - Parsing contents into key/value pairs.
//! - Injecting variables into the process environment.
//! - Caching previously read contents; every call re-reads the file.
//!
//! Invariants:
//! - Each call opens its own handle; nothing is shared between calls.
//! - `load` returns an empty string on any failure, indistinguishable from
//!   a legitimately empty file; `try_load` keeps the two apart.

mod error;

#[cfg(test)]
mod tests;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use error::EnvError;

use crate::handle::ScopedFile;
use crate::path::{default_env_path, working_dir};

/// Reads the full contents of an env file as a single string.
///
/// No parsing is performed; the file's text is returned verbatim,
/// including any byte-order mark or trailing newline.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    path: PathBuf,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Loader for the default `.env` file, resolved against the current
    /// working directory at load time.
    pub fn new() -> Self {
        Self {
            path: default_env_path(),
        }
    }

    /// Loader for an arbitrary env file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the entire file, degrading to an empty string on failure.
    ///
    /// A failed open emits one warn event (from [`ScopedFile::open`]) and
    /// yields `""`; so does a failed read after a successful open. The
    /// caller cannot tell those apart from a legitimately empty file; use
    /// [`EnvLoader::try_load`] when that distinction matters.
    pub fn load(&self) -> String {
        self.trace_resolution();
        let mut handle = ScopedFile::open(&self.path);
        let Some(mut file) = handle.take() else {
            return String::new();
        };
        let mut content = String::new();
        if let Err(error) = file.read_to_string(&mut content) {
            tracing::warn!(
                path = %self.path.display(),
                error = %error,
                "Failed to read env file, returning empty contents"
            );
            return String::new();
        }
        content
    }

    /// Load the entire file, reporting failures as [`EnvError`].
    ///
    /// A missing or unreadable file is an error; an empty file is
    /// `Ok("")`. Emits no warn diagnostics.
    pub fn try_load(&self) -> Result<String, EnvError> {
        self.trace_resolution();
        let mut handle = ScopedFile::try_open(&self.path)?;
        // try_open never yields a closed handle.
        let Some(mut file) = handle.take() else {
            return Ok(String::new());
        };
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|error| EnvError::Read {
                path: self.path.clone(),
                kind: error.kind(),
            })?;
        Ok(content)
    }

    fn trace_resolution(&self) {
        if !self.path.is_relative() {
            return;
        }
        match working_dir() {
            Ok(dir) => tracing::debug!(
                path = %self.path.display(),
                dir = %dir.display(),
                "Resolving env file against working directory"
            ),
            Err(error) => tracing::debug!(
                path = %self.path.display(),
                error = %error,
                "Could not determine working directory for env file"
            ),
        }
    }
}
