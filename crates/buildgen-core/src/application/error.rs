//! Application layer errors.
//!
//! These errors represent failures in loading and scanning, not in
//! generation rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The project manifest could not be read.
    #[error("cannot read {}: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// The project manifest was read but is malformed.
    #[error("invalid manifest {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    /// A resource directory declared in the manifest does not exist.
    #[error("resource directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A resource file could not be parsed by its extractor.
    #[error("cannot extract resources from {}: {reason}", .path.display())]
    InvalidResource { path: PathBuf, reason: String },

    /// Walking or reading a resource directory failed.
    #[error("scan failed at {}: {reason}", .path.display())]
    ScanFailed { path: PathBuf, reason: String },

    /// Two scanned sources map to the same resource namespace.
    #[error("namespace '{namespace}' comes from both {first} and {second}")]
    NamespaceCollision {
        namespace: String,
        first: String,
        second: String,
    },

    /// The manifest declares no build config and no resources.
    #[error("nothing to generate in {source_name}")]
    NothingToGenerate { source_name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Pass the manifest path explicitly: buildgen generate path/to/buildgen.toml".into(),
                "Or set defaults.manifest in the config file".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Fix the manifest at {}", path.display()),
                "Each [[build_config]] needs name, group and version".into(),
                "Field types are string, bool, int or double".into(),
            ],
            Self::DirectoryNotFound { path } => vec![
                format!("Create {} or remove it from [[resources.directories]]", path.display()),
                "Relative paths are resolved against the manifest's directory".into(),
            ],
            Self::InvalidResource { path, .. } => vec![
                format!("Fix the syntax of {}", path.display()),
                "Or add it to the directory's exclude list".into(),
            ],
            Self::ScanFailed { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
            ],
            Self::NamespaceCollision { first, second, .. } => vec![
                format!("Rename {first} or {second}"),
                "Directory names are rewritten into identifiers: '-', '.' and spaces become '_'"
                    .into(),
                "Or exclude one of them from the directory scan".into(),
            ],
            Self::NothingToGenerate { .. } => vec![
                "Add a [[build_config]] table or a [resources] section".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } | Self::DirectoryNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidManifest { .. }
            | Self::InvalidResource { .. }
            | Self::NothingToGenerate { .. } => ErrorCategory::Validation,
            Self::NamespaceCollision { .. } => ErrorCategory::Conflict,
            Self::ScanFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_collision_is_a_conflict() {
        let err = ApplicationError::NamespaceCollision {
            namespace: "a_b".into(),
            first: "a-b/".into(),
            second: "a_b/".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(
            err.to_string(),
            "namespace 'a_b' comes from both a-b/ and a_b/"
        );
        assert!(err.suggestions()[0].contains("a-b/"));
    }

    #[test]
    fn unreadable_resource_is_a_validation_error() {
        let err = ApplicationError::InvalidResource {
            path: "res/a.css".into(),
            reason: "stream did not contain valid UTF-8".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
