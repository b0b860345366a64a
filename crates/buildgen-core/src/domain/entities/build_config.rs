//! The build configuration record and its builder.
//!
//! A `BuildConfigSpec` is one resolved configuration target (typically one per
//! build variant). The builder fills defaults and rejects missing required
//! fields; the constant compiler re-validates so records built elsewhere are
//! held to the same rules.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    identifier,
    value_objects::{ConfigValue, RawLiteral, ValueKind},
};

/// Class name used when a record does not set one.
pub const DEFAULT_CLASS_NAME: &str = "BuildConfig";

// ── CustomField ──────────────────────────────────────────────────────────────

/// A user-declared typed field, emitted after the canonical roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomField {
    identifier: String,
    value: ConfigValue,
}

impl CustomField {
    pub fn new(identifier: impl Into<String>, value: ConfigValue) -> Self {
        Self {
            identifier: identifier.into(),
            value,
        }
    }

    /// Build the value from a raw literal, naming the field on mismatch.
    pub fn typed(
        identifier: impl Into<String>,
        kind: ValueKind,
        raw: impl Into<RawLiteral>,
    ) -> Result<Self, DomainError> {
        let identifier = identifier.into();
        let value = ConfigValue::construct(kind, raw).map_err(|e| e.for_field(&identifier))?;
        Ok(Self { identifier, value })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }
}

// ── BuildConfigSpec ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfigSpec {
    package: String,
    class_name: String,
    name: String,
    group: String,
    version: String,
    debug: Option<bool>,
    artifact: Option<String>,
    description: Option<String>,
    email: Option<String>,
    url: Option<String>,
    scheme: Option<String>,
    fields: Vec<CustomField>,
}

impl BuildConfigSpec {
    pub fn builder() -> BuildConfigSpecBuilder {
        BuildConfigSpecBuilder::default()
    }

    pub fn package(&self) -> &str {
        &self.package
    }
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn group(&self) -> &str {
        &self.group
    }
    pub fn version(&self) -> &str {
        &self.version
    }
    pub fn debug(&self) -> Option<bool> {
        self.debug
    }
    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
    /// Scheme id; `None` means the compiler's default.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }
    pub fn fields(&self) -> &[CustomField] {
        &self.fields
    }

    /// Check required fields and the class name.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if name, group, version, package or class
    ///   name is blank
    /// - `InvalidIdentifier` if the class name is not an identifier
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("name", &self.name),
            ("group", &self.group),
            ("version", &self.version),
            ("package", &self.package),
            ("class_name", &self.class_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::MissingRequiredField { field });
            }
        }

        identifier::ensure_identifier(&self.class_name, || "class name".into())
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct BuildConfigSpecBuilder {
    package: Option<String>,
    class_name: Option<String>,
    name: Option<String>,
    group: Option<String>,
    version: Option<String>,
    debug: Option<bool>,
    artifact: Option<String>,
    description: Option<String>,
    email: Option<String>,
    url: Option<String>,
    scheme: Option<String>,
    fields: Vec<CustomField>,
}

impl BuildConfigSpecBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Defaults to the group when unset.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn field(mut self, field: CustomField) -> Self {
        self.fields.push(field);
        self
    }

    /// Typed convenience over [`CustomField::typed`].
    pub fn typed_field(
        self,
        identifier: impl Into<String>,
        kind: ValueKind,
        raw: impl Into<RawLiteral>,
    ) -> Result<Self, DomainError> {
        Ok(self.field(CustomField::typed(identifier, kind, raw)?))
    }

    pub fn build(self) -> Result<BuildConfigSpec, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let group = self
            .group
            .ok_or(DomainError::MissingRequiredField { field: "group" })?;
        let version = self
            .version
            .ok_or(DomainError::MissingRequiredField { field: "version" })?;

        let spec = BuildConfigSpec {
            package: self.package.unwrap_or_else(|| group.clone()),
            class_name: self
                .class_name
                .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_owned()),
            name,
            group,
            version,
            debug: self.debug,
            artifact: self.artifact,
            description: self.description,
            email: self.email,
            url: self.url,
            scheme: self.scheme,
            fields: self.fields,
        };

        spec.validate()?;
        Ok(spec)
    }
}
