//! Naming schemes and the field namer.
//!
//! # Design
//!
//! A [`NamingScheme`] is a total table from [`Role`] to output identifier,
//! indexed by role, so every canonical role always has a name. Schemes are
//! selected by id through a [`SchemeRegistry`] once per compile call and are
//! never patched mid-pass.
//!
//! # Adding a Built-in Scheme
//!
//! 1. Add a constructor next to [`NamingScheme::qualified`]
//! 2. Register it in [`SchemeRegistry::builtin`]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, identifier, value_objects::Role};

/// Id of the scheme that keeps every role's default identifier.
pub const DEFAULT_SCHEME: &str = "default";

/// Id of the built-in scheme that qualifies NAME and GROUP.
pub const QUALIFIED_SCHEME: &str = "qualified";

// ── NamingScheme ─────────────────────────────────────────────────────────────

/// A total mapping from canonical roles to output identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingScheme {
    id: String,
    identifiers: [String; Role::COUNT],
}

impl NamingScheme {
    /// Start a scheme from the default identifiers.
    pub fn builder(id: impl Into<String>) -> NamingSchemeBuilder {
        NamingSchemeBuilder {
            id: id.into(),
            identifiers: Role::ALL.map(|role| role.default_identifier().to_owned()),
        }
    }

    /// NAME→NAME, GROUP→GROUP, VERSION→VERSION, DEBUG→DEBUG.
    pub fn default_scheme() -> Self {
        Self {
            id: DEFAULT_SCHEME.to_owned(),
            identifiers: Role::ALL.map(|role| role.default_identifier().to_owned()),
        }
    }

    /// NAME→APP_NAME, GROUP→GROUP_ID, ARTIFACT→ARTIFACT_ID; others unchanged.
    pub fn qualified() -> Self {
        let mut scheme = Self::default_scheme();
        scheme.id = QUALIFIED_SCHEME.to_owned();
        scheme.identifiers[Role::Name.index()] = "APP_NAME".to_owned();
        scheme.identifiers[Role::Group.index()] = "GROUP_ID".to_owned();
        scheme.identifiers[Role::Artifact.index()] = "ARTIFACT_ID".to_owned();
        scheme
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn identifier(&self, role: Role) -> &str {
        &self.identifiers[role.index()]
    }

    /// Check the table. Called by the builder and by the registry, since a
    /// deserialized scheme never went through the builder.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` if the id is blank or an identifier is malformed
    /// - `DuplicateField` if two roles share an identifier
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier {
                identifier: self.id.clone(),
                origin: "naming scheme id".into(),
            });
        }

        let mut seen = HashSet::new();
        for (role, name) in self.mappings() {
            identifier::ensure_identifier(name, || {
                format!("role {} in naming scheme '{}'", role, self.id)
            })?;
            if !seen.insert(name) {
                return Err(DomainError::DuplicateField {
                    identifier: name.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// `(role, identifier)` pairs in emission order.
    pub fn mappings(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL
            .into_iter()
            .map(move |role| (role, self.identifier(role)))
    }
}

/// Builder for user-defined schemes.
///
/// Every role starts at its default identifier; only explicit renames change
/// the table, so the result is total by construction.
#[derive(Debug, Clone)]
pub struct NamingSchemeBuilder {
    id: String,
    identifiers: [String; Role::COUNT],
}

impl NamingSchemeBuilder {
    pub fn rename(mut self, role: Role, identifier: impl Into<String>) -> Self {
        self.identifiers[role.index()] = identifier.into();
        self
    }

    /// # Errors
    ///
    /// See [`NamingScheme::validate`].
    pub fn build(self) -> Result<NamingScheme, DomainError> {
        let scheme = NamingScheme {
            id: self.id,
            identifiers: self.identifiers,
        };
        scheme.validate()?;
        Ok(scheme)
    }
}

// ── SchemeRegistry ───────────────────────────────────────────────────────────

/// Schemes available to a generation pass, looked up by id.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    schemes: Vec<NamingScheme>,
}

impl SchemeRegistry {
    /// Registry holding `default` and `qualified`.
    pub fn builtin() -> Self {
        Self {
            schemes: vec![NamingScheme::default_scheme(), NamingScheme::qualified()],
        }
    }

    /// Add a user-defined scheme.
    ///
    /// # Errors
    ///
    /// `DuplicateScheme` if a scheme with the same id is already present, or
    /// any error from [`NamingScheme::validate`].
    pub fn register(&mut self, scheme: NamingScheme) -> Result<(), DomainError> {
        scheme.validate()?;
        if self.schemes.iter().any(|s| s.id == scheme.id) {
            return Err(DomainError::DuplicateScheme { id: scheme.id });
        }
        self.schemes.push(scheme);
        Ok(())
    }

    pub fn with(mut self, scheme: NamingScheme) -> Result<Self, DomainError> {
        self.register(scheme)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// `UnknownScheme` listing every registered id.
    pub fn resolve(&self, id: &str) -> Result<&NamingScheme, DomainError> {
        self.schemes
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::UnknownScheme {
                id: id.to_owned(),
                known: self.ids().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamingScheme> {
        self.schemes.iter()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── FieldNamer ───────────────────────────────────────────────────────────────

/// A logical field before naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
    Role(Role),
    Custom(&'a str),
}

/// Maps logical fields to output identifiers under one scheme.
///
/// Only canonical roles are rewritten; custom identifiers pass through.
#[derive(Debug, Clone, Copy)]
pub struct FieldNamer<'s> {
    scheme: &'s NamingScheme,
}

impl<'s> FieldNamer<'s> {
    pub fn new(scheme: &'s NamingScheme) -> Self {
        Self { scheme }
    }

    /// Select the scheme named `scheme_id` from `registry`.
    ///
    /// # Errors
    ///
    /// `UnknownScheme` if the id is not registered.
    pub fn from_registry(registry: &'s SchemeRegistry, scheme_id: &str) -> Result<Self, DomainError> {
        registry.resolve(scheme_id).map(Self::new)
    }

    pub fn scheme(&self) -> &'s NamingScheme {
        self.scheme
    }

    pub fn role(&self, role: Role) -> &'s str {
        self.scheme.identifier(role)
    }

    pub fn name<'k>(&self, key: FieldKey<'k>) -> &'k str
    where
        's: 'k,
    {
        match key {
            FieldKey::Role(role) => self.role(role),
            FieldKey::Custom(identifier) => identifier,
        }
    }
}
