//! Command handlers.
//!
//! Each handler translates parsed arguments into adapter and service calls and
//! renders the result. No generation rules live here.

use std::path::PathBuf;

use tracing::debug;

use buildgen_adapters::{DirectoryScanner, TomlProjectSource};
use buildgen_core::application::GenerationService;

use crate::config::AppConfig;

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod schemes;

/// Explicit path, else `defaults.manifest` from the app config.
fn manifest_path(explicit: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    explicit.unwrap_or_else(|| config.defaults.manifest.clone())
}

/// Wire the TOML source and the filesystem scanner into a service.
fn build_service(manifest: PathBuf, scheme: Option<String>, config: &AppConfig) -> GenerationService {
    let scheme = scheme.unwrap_or_else(|| config.defaults.scheme.clone());
    debug!(manifest = %manifest.display(), scheme = %scheme, "Building generation service");

    GenerationService::new(
        Box::new(TomlProjectSource::new(manifest)),
        Box::new(DirectoryScanner::new()),
    )
    .with_default_scheme(scheme)
}
