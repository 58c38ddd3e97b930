//! Scoped file handle with guaranteed release.
//!
//! Responsibilities:
//! - Open a file for combined read/write access, tied to the wrapper's
//!   lifetime.
//! - Transfer ownership of the underlying `File` out to callers on request.
//! - Release the OS handle exactly once, on whichever owner drops it.
//!
//! Does NOT handle:
//! - Reading file contents (see `loader`).
//! - Path resolution (see `path.rs`).
//!
//! Invariants:
//! - After `take()` the wrapper holds no resource; dropping it is a no-op
//!   with respect to the file.
//! - A failed open leaves the wrapper in the not-open state; the lenient
//!   constructor never panics and emits exactly one warn event per failure.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::loader::EnvError;

/// RAII wrapper around `std::fs::File`.
///
/// The file is opened for combined reading and writing and closed when the
/// last owner of the inner `File` goes out of scope. Callers that want the
/// stream itself move it out with [`ScopedFile::take`]; the wrapper is
/// inert afterwards, so the descriptor is never closed twice.
#[derive(Debug)]
pub struct ScopedFile {
    path: PathBuf,
    file: Option<File>,
}

impl ScopedFile {
    /// Open `path` for reading and writing.
    ///
    /// On failure (missing file, permission denied, or any other OS-level
    /// open failure) this logs a single warn event naming the attempted
    /// path and returns a handle in the not-open state. It never panics
    /// and never returns an error; callers that need a structured failure
    /// should use [`ScopedFile::try_open`] instead.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match Self::open_rw(&path) {
            Ok(file) => Some(file),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "Unable to open the file"
                );
                None
            }
        };
        Self { path, file }
    }

    /// Open `path` for reading and writing, reporting failure as
    /// [`EnvError::Open`].
    ///
    /// Unlike [`ScopedFile::open`] this emits no diagnostic; the failure
    /// belongs to the caller.
    pub fn try_open(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let path = path.as_ref().to_path_buf();
        match Self::open_rw(&path) {
            Ok(file) => Ok(Self {
                path,
                file: Some(file),
            }),
            Err(error) => Err(EnvError::Open {
                path,
                kind: error.kind(),
            }),
        }
    }

    fn open_rw(path: &Path) -> io::Result<File> {
        OpenOptions::new().read(true).write(true).open(path)
    }

    /// Whether the wrapper currently holds an open file.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// The path this handle was constructed with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the underlying file out of the wrapper.
    ///
    /// Returns `None` if the open failed or the file was already taken.
    /// After this call the wrapper no longer owns a resource; the returned
    /// `File` is closed when its new owner drops it.
    pub fn take(&mut self) -> Option<File> {
        self.file.take()
    }
}
