//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define error variants for the strict (`try_`) open and read paths.
//!
//! Does NOT handle:
//! - The lenient degrade-to-empty policy (see `EnvLoader::load`).
//!
//! Invariants:
//! - Variants carry the attempted path and the `io::ErrorKind`, never file
//!   contents, so error messages cannot leak secrets held in env files.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the strict loading API.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The file could not be opened: missing, permission denied, or any
    /// other OS-level open failure.
    #[error("Unable to open the file: {path} ({kind})")]
    Open { path: PathBuf, kind: ErrorKind },

    /// The file opened but its contents could not be read. Content that is
    /// not valid UTF-8 surfaces here as `ErrorKind::InvalidData`.
    #[error("Failed to read env file at {path} ({kind})")]
    Read { path: PathBuf, kind: ErrorKind },
}

impl EnvError {
    /// The path of the file the failed operation was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            EnvError::Open { path, .. } | EnvError::Read { path, .. } => path,
        }
    }

    /// The `io::ErrorKind` reported by the underlying operation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::Open { kind, .. } | EnvError::Read { kind, .. } => *kind,
        }
    }

    /// Whether this error means the file does not exist.
    ///
    /// Distinguishes "file missing" from every other failure, which the
    /// lenient API conflates with an empty file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EnvError::Open {
                kind: ErrorKind::NotFound,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display_names_path_and_kind() {
        let error = EnvError::Open {
            path: PathBuf::from(".env"),
            kind: ErrorKind::NotFound,
        };
        let rendered = error.to_string();
        assert!(rendered.contains(".env"), "got: {rendered}");
        assert!(error.is_not_found());
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_read_error_is_not_treated_as_missing() {
        let error = EnvError::Read {
            path: PathBuf::from(".env"),
            kind: ErrorKind::InvalidData,
        };
        assert!(!error.is_not_found());
        assert_eq!(error.path(), std::path::Path::new(".env"));
    }
}
