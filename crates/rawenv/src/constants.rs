//! Centralized constants for the rawenv workspace.
//!
//! This module contains default values used across the crate to avoid
//! magic string duplication and improve maintainability.

/// Default env file name, resolved by the OS against the current working
/// directory at open time.
pub const DEFAULT_ENV_FILE: &str = ".env";
