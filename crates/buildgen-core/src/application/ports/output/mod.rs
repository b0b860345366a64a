//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `buildgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ProjectManifest, ResourceManifest, ScanOptions};
use crate::error::BuildgenResult;

/// Port for loading the project manifest.
///
/// Implemented by:
/// - `buildgen_adapters::manifest::TomlProjectSource` (production)
/// - `buildgen_adapters::manifest::InMemoryProjectSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectSource: Send + Sync {
    /// Human-readable origin for logs and errors (usually a path).
    fn describe(&self) -> String;

    /// Resolve the manifest. Relative resource directories in the result
    /// must already be resolved against the source's location.
    fn load(&self) -> BuildgenResult<ProjectManifest>;
}

/// Port for turning a resource directory into resource manifests.
///
/// Implemented by:
/// - `buildgen_adapters::scanner::DirectoryScanner` (production)
/// - `buildgen_adapters::scanner::MemoryScanner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ResourceScanner: Send + Sync {
    /// One manifest per directory under `root`, including `root` itself,
    /// in a deterministic order.
    fn scan(&self, root: &Path, options: &ScanOptions) -> BuildgenResult<Vec<ResourceManifest>>;
}
