//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test the lenient degrade-to-empty load path and its diagnostics.
//! - Test the strict `try_load` error taxonomy.
//! - Test default-path resolution against the current working directory.
//!
//! Invariants:
//! - Tests that change the working directory hold `env_lock()` to avoid
//!   cross-test contamination; the directory is restored via `CwdGuard`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for working-directory isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
