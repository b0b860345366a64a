use crate::domain::{
    entities::BuildConfigSpec,
    error::DomainError,
    naming::NamingScheme,
};

/// Centralized domain validation.
///
/// Entities own their rules; this is the single entry point compilers and
/// services go through.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_build_config(config: &BuildConfigSpec) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_naming_scheme(scheme: &NamingScheme) -> Result<(), DomainError> {
        scheme.validate()
    }
}
