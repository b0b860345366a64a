// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for buildgen.
//!
//! This module contains the pure generation engine. Loading manifests and
//! scanning resource directories happen behind ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: compilation is synchronous
//! - **No I/O**: compilers never touch the filesystem, not even to check paths
//! - **No tracing**: observability belongs to the application and CLI layers
//! - **Immutable artifacts**: built once per pass, returned by value
//!
// Public API - what the world sees
pub mod compiler;
pub mod entities;
pub mod error;
pub mod identifier;
pub mod naming;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use compiler::{ConstantTableCompiler, ResourceKeyDeriver, ResourceTableCompiler};

pub use entities::{
    Accessor, Artifact, BuildConfigSpec, BuildConfigSpecBuilder, Constant, CssOptions, CustomField,
    FieldOrigin, GenerationReport, JsonOptions, KeyOptions, ProjectManifest, PropertiesOptions,
    ResourceArtifact, ResourceDirectory, ResourceEntry, ResourceManifest, ResourceValue,
    ScanOptions,
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{
    DEFAULT_SCHEME, FieldKey, FieldNamer, NamingScheme, NamingSchemeBuilder, QUALIFIED_SCHEME,
    SchemeRegistry,
};

pub use value_objects::{ConfigValue, RawLiteral, Role, ValueKind};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Value Model
    // ========================================================================

    #[test]
    fn double_twelve_is_not_int_twelve() {
        let double = ConfigValue::construct(ValueKind::Double, 12.0).unwrap();
        let int = ConfigValue::construct(ValueKind::Int, 12_i64).unwrap();

        assert_eq!(double, ConfigValue::Double(12.0));
        assert_ne!(double, int);
        assert!(double.try_eq(&int).is_err());
    }

    #[test]
    fn int_nine_equals_only_int_nine() {
        let nine = ConfigValue::construct(ValueKind::Int, "9").unwrap();

        assert!(nine.try_eq(&ConfigValue::Int(9)).unwrap());
        assert!(!nine.try_eq(&ConfigValue::Int(10)).unwrap());
        assert!(nine.try_eq(&ConfigValue::Double(9.0)).is_err());
        assert!(nine.try_eq(&ConfigValue::String("9".into())).is_err());
    }

    #[test]
    fn non_numeric_text_is_a_type_mismatch() {
        for kind in [ValueKind::Int, ValueKind::Double] {
            assert!(matches!(
                ConfigValue::construct(kind, "twelve"),
                Err(DomainError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn coercion_rules() {
        assert!(ConfigValue::construct(ValueKind::Int, 12.0).is_err());
        assert!(ConfigValue::construct(ValueKind::Double, f64::NAN).is_err());
        assert!(ConfigValue::construct(ValueKind::Double, "inf").is_err());
        assert!(ConfigValue::construct(ValueKind::Double, 1_i64 << 53).is_ok());
        assert!(ConfigValue::construct(ValueKind::Double, (1_i64 << 53) + 1).is_err());
        assert!(ConfigValue::construct(ValueKind::Double, i64::MIN).is_err());
        assert!(ConfigValue::construct(ValueKind::Bool, "yes").is_err());
        assert!(ConfigValue::construct(ValueKind::Bool, "TRUE").is_err());
        assert!(ConfigValue::construct(ValueKind::String, 5_i64).is_err());
    }

    #[test]
    fn literals_read_back_to_equal_values() {
        let values = [
            ConfigValue::String("say \"hi\"\n\\ok".into()),
            ConfigValue::Bool(true),
            ConfigValue::Int(-42),
            ConfigValue::Double(12.0),
            ConfigValue::Double(0.1),
            ConfigValue::Double(1e300),
        ];
        for value in values {
            let literal = value.literal();
            let parsed = ConfigValue::parse_literal(value.kind(), &literal).unwrap();
            assert_eq!(parsed, value, "literal {literal}");
        }
        assert_eq!(ConfigValue::Double(12.0).literal(), "12.0");
        assert_eq!(ConfigValue::String("a".into()).to_string(), "a");
    }

    #[test]
    fn value_kind_parses_aliases() {
        assert_eq!("Boolean".parse::<ValueKind>().unwrap(), ValueKind::Bool);
        assert_eq!("long".parse::<ValueKind>().unwrap(), ValueKind::Int);
        assert!(matches!(
            "decimal".parse::<ValueKind>(),
            Err(DomainError::UnknownValueKind { .. })
        ));
    }

    #[test]
    fn role_parses_name_or_identifier() {
        assert_eq!("group".parse::<Role>().unwrap(), Role::Group);
        assert_eq!("DESC".parse::<Role>().unwrap(), Role::Description);
        assert!("APP_NAME".parse::<Role>().is_err());
    }

    // ========================================================================
    // End-to-end scenarios
    // ========================================================================

    #[test]
    fn scenario_custom_scheme_build_config() {
        let registry = SchemeRegistry::builtin()
            .with(
                NamingScheme::builder("custom")
                    .rename(Role::Name, "APP_NAME")
                    .rename(Role::Group, "GROUP_ID")
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let config = BuildConfigSpec::builder()
            .name("Hello world!")
            .group("my.website")
            .version("2.0")
            .debug(true)
            .scheme("custom")
            .typed_field("A_STRING", ValueKind::String, "Hello world!")
            .unwrap()
            .typed_field("A_DOUBLE", ValueKind::Double, 12.0)
            .unwrap()
            .typed_field("AN_INT", ValueKind::Int, 9_i64)
            .unwrap()
            .build()
            .unwrap();

        let artifact = ConstantTableCompiler::new(&registry).compile(&config).unwrap();

        let entries: Vec<_> = artifact
            .iter()
            .map(|c| (c.identifier(), c.value().clone()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("APP_NAME", ConfigValue::String("Hello world!".into())),
                ("GROUP_ID", ConfigValue::String("my.website".into())),
                ("VERSION", ConfigValue::String("2.0".into())),
                ("DEBUG", ConfigValue::Bool(true)),
                ("A_STRING", ConfigValue::String("Hello world!".into())),
                ("A_DOUBLE", ConfigValue::Double(12.0)),
                ("AN_INT", ConfigValue::Int(9)),
            ]
        );
    }

    #[test]
    fn scenario_style_resource_table() {
        let manifest = ResourceManifest::new("style")
            .with_entry(ResourceEntry::named("text-field", "text-field"))
            .with_entry(ResourceEntry::named("hyperlink", "hyperlink"))
            .with_entry(ResourceEntry::named("label", "label"))
            .with_entry(ResourceEntry::anonymous("some.css"))
            .with_entry(ResourceEntry::anonymous("another.css"));

        let artifact = ResourceTableCompiler::default().compile(&manifest).unwrap();

        let table: Vec<_> = artifact
            .iter()
            .map(|a| (a.key(), a.value().clone()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("text_field", ResourceValue::Text("text-field".into())),
                ("hyperlink", ResourceValue::Text("hyperlink".into())),
                ("label", ResourceValue::Text("label".into())),
                ("_some", ResourceValue::Path("/style/some.css".into())),
                ("_another", ResourceValue::Path("/style/another.css".into())),
            ]
        );
    }

    #[test]
    fn compilers_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConstantTableCompiler<'static>>();
        assert_send_sync::<ResourceTableCompiler>();
        assert_send_sync::<SchemeRegistry>();
    }
}
