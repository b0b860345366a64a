//! Configuration record → ordered constant table.

use std::collections::HashSet;

use crate::domain::{
    entities::{Artifact, BuildConfigSpec, Constant, FieldOrigin},
    error::DomainError,
    identifier,
    naming::{DEFAULT_SCHEME, FieldNamer, SchemeRegistry},
    validation::DomainValidator,
    value_objects::{ConfigValue, Role},
};

/// Compiles [`BuildConfigSpec`]s into [`Artifact`]s.
///
/// Emission order is fixed: NAME, GROUP, VERSION, DEBUG, then the optional
/// descriptive roles that are set, then user fields in declaration order.
/// Output identifiers are unique across the whole table.
#[derive(Debug, Clone)]
pub struct ConstantTableCompiler<'r> {
    registry: &'r SchemeRegistry,
    default_scheme: String,
}

impl<'r> ConstantTableCompiler<'r> {
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self {
            registry,
            default_scheme: DEFAULT_SCHEME.to_owned(),
        }
    }

    /// Scheme used for records that do not name one.
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn compile(&self, config: &BuildConfigSpec) -> Result<Artifact, DomainError> {
        DomainValidator::validate_build_config(config)?;

        let scheme_id = config.scheme().unwrap_or(self.default_scheme.as_str());
        let namer = FieldNamer::from_registry(self.registry, scheme_id)?;

        let mut table = Table::with_capacity(Role::COUNT + config.fields().len());

        table.role(&namer, Role::Name, ConfigValue::String(config.name().to_owned()))?;
        table.role(&namer, Role::Group, ConfigValue::String(config.group().to_owned()))?;
        table.role(&namer, Role::Version, ConfigValue::String(config.version().to_owned()))?;
        table.role(&namer, Role::Debug, ConfigValue::Bool(config.debug().unwrap_or(false)))?;

        let optional = [
            (Role::Artifact, config.artifact()),
            (Role::Description, config.description()),
            (Role::Email, config.email()),
            (Role::Url, config.url()),
        ];
        for (role, value) in optional {
            if let Some(value) = value {
                table.role(&namer, role, ConfigValue::String(value.to_owned()))?;
            }
        }

        for (position, field) in config.fields().iter().enumerate() {
            identifier::ensure_identifier(field.identifier(), || {
                format!("custom field #{}", position + 1)
            })?;
            table.push(Constant::new(
                field.identifier(),
                FieldOrigin::Custom,
                field.value().clone(),
            ))?;
        }

        Ok(Artifact::new(
            config.package().to_owned(),
            config.class_name().to_owned(),
            table.constants,
        ))
    }
}

struct Table {
    constants: Vec<Constant>,
    seen: HashSet<String>,
}

impl Table {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            constants: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    fn role(&mut self, namer: &FieldNamer<'_>, role: Role, value: ConfigValue) -> Result<(), DomainError> {
        debug_assert_eq!(value.kind(), role.kind());
        self.push(Constant::new(namer.role(role), FieldOrigin::Role(role), value))
    }

    fn push(&mut self, constant: Constant) -> Result<(), DomainError> {
        if !self.seen.insert(constant.identifier().to_owned()) {
            return Err(DomainError::DuplicateField {
                identifier: constant.identifier().to_owned(),
            });
        }
        self.constants.push(constant);
        Ok(())
    }
}
