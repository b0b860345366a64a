// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ValueKind;

/// Root domain error type.
///
/// All errors are:
/// - Deterministic (input validation, never transient)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions naming the offending field or entry)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error(
        "type mismatch for {}: expected {expected}, found {found}",
        .field.as_deref().unwrap_or("value")
    )]
    TypeMismatch {
        field: Option<String>,
        expected: ValueKind,
        found: String,
    },

    #[error("invalid identifier '{identifier}' ({origin})")]
    InvalidIdentifier { identifier: String, origin: String },

    #[error("unknown value type '{name}'")]
    UnknownValueKind { name: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Conflict Errors
    // ========================================================================
    #[error("duplicate field '{identifier}'")]
    DuplicateField { identifier: String },

    #[error(
        "duplicate key '{key}' in '{namespace}': entries #{first} and #{second} derive the same key"
    )]
    DuplicateKey {
        key: String,
        namespace: String,
        first: usize,
        second: usize,
    },

    #[error("naming scheme '{id}' is already registered")]
    DuplicateScheme { id: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("unknown naming scheme '{id}' (known: {known})")]
    UnknownScheme { id: String, known: String },
}

impl DomainError {
    /// Attach the offending field name to a value error.
    ///
    /// Value construction happens before the field is known, so loaders call
    /// this once they know which declaration produced the literal. Other
    /// variants already carry their identifier and pass through untouched.
    pub fn for_field(self, name: impl Into<String>) -> Self {
        match self {
            Self::TypeMismatch {
                expected, found, ..
            } => Self::TypeMismatch {
                field: Some(name.into()),
                expected,
                found,
            },
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TypeMismatch {
                field, expected, ..
            } => vec![
                format!(
                    "Declare {} with a literal that fits {}",
                    field.as_deref().unwrap_or("the value"),
                    expected
                ),
                match expected {
                    ValueKind::Bool => "  • bool accepts only true or false".into(),
                    ValueKind::Int => "  • int accepts whole numbers, never 12.0".into(),
                    ValueKind::Double => "  • double accepts finite numbers such as 12.0".into(),
                    ValueKind::String => "  • string values must be quoted text".into(),
                },
            ],
            Self::InvalidIdentifier { identifier, origin } => vec![
                format!("'{}' from {} is not a usable identifier", identifier, origin),
                "Identifiers start with a letter or '_' and contain letters, digits, '_'".into(),
                "Hyphens are rewritten to underscores; other punctuation is rejected".into(),
            ],
            Self::DuplicateField { identifier } => vec![
                format!("Two fields produce the identifier '{}'", identifier),
                "Rename the custom field, or pick a naming scheme that avoids it".into(),
            ],
            Self::DuplicateKey {
                key,
                namespace,
                first,
                second,
            } => vec![
                format!(
                    "Entries #{} and #{} of '{}' both map to '{}'",
                    first, second, namespace, key
                ),
                "Named ids are normalised ('a-b' and 'a_b' collide)".into(),
                "Anonymous files become '_<name>'; avoid naming entries that way".into(),
            ],
            Self::DuplicateScheme { id } => vec![
                format!("Scheme '{}' is defined twice", id),
                "Built-in schemes are 'default' and 'qualified'".into(),
            ],
            Self::UnknownScheme { known, .. } => vec![
                format!("Available schemes: {}", known),
                "Try: buildgen schemes".into(),
            ],
            Self::UnknownValueKind { name } => vec![
                format!("'{}' is not a value type", name),
                "Supported types: string, bool, int, double".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Set '{}' in the build configuration", field),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. }
            | Self::InvalidIdentifier { .. }
            | Self::UnknownValueKind { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::DuplicateField { .. } | Self::DuplicateKey { .. } | Self::DuplicateScheme { .. } => {
                ErrorCategory::Conflict
            }
            Self::UnknownScheme { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_field_fills_type_mismatch() {
        let err = DomainError::TypeMismatch {
            field: None,
            expected: ValueKind::Int,
            found: "text 'abc'".into(),
        }
        .for_field("AN_INT");

        assert_eq!(
            err.to_string(),
            "type mismatch for AN_INT: expected int, found text 'abc'"
        );
    }

    #[test]
    fn for_field_leaves_other_variants() {
        let err = DomainError::DuplicateField {
            identifier: "NAME".into(),
        };
        assert_eq!(err.clone().for_field("X"), err);
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::UnknownScheme {
                id: "x".into(),
                known: "default".into()
            }
            .category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::DuplicateField {
                identifier: "NAME".into()
            }
            .category(),
            ErrorCategory::Conflict
        );
    }
}
