//! Infrastructure adapters for buildgen.
//!
//! This crate implements the ports defined in `buildgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.
//!
//! - [`TomlProjectSource`] / [`InMemoryProjectSource`] implement `ProjectSource`
//! - [`DirectoryScanner`] / [`MemoryScanner`] implement `ResourceScanner`

pub mod manifest;
pub mod scanner;

// Re-export commonly used adapters
pub use manifest::{DEFAULT_MANIFEST_NAME, InMemoryProjectSource, TomlProjectSource};
pub use scanner::{DirectoryScanner, MemoryScanner};
