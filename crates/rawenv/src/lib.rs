//! Raw env file loading for local tooling.
//!
//! This crate provides a scoped file handle ([`ScopedFile`]) and a loader
//! ([`EnvLoader`]) that reads the full contents of an env file into a
//! single string. The contents are returned verbatim; nothing is parsed
//! into key/value pairs and nothing is injected into the process
//! environment.

pub mod constants;
mod handle;
mod loader;
mod path;

pub use handle::ScopedFile;
pub use loader::{EnvError, EnvLoader};
