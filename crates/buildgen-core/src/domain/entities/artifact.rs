//! The generated constant table.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigValue, Role, ValueKind};

/// Where a constant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrigin {
    Role(Role),
    Custom,
}

/// One named, typed constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    identifier: String,
    origin: FieldOrigin,
    value: ConfigValue,
}

impl Constant {
    pub fn new(identifier: impl Into<String>, origin: FieldOrigin, value: ConfigValue) -> Self {
        Self {
            identifier: identifier.into(),
            origin,
            value,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
    pub fn origin(&self) -> FieldOrigin {
        self.origin
    }
    pub fn value(&self) -> &ConfigValue {
        &self.value
    }
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

/// Ordered constants for one configuration target.
///
/// Built once by the constant compiler; insertion order is emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    package: String,
    name: String,
    constants: Vec<Constant>,
}

impl Artifact {
    pub(crate) fn new(package: String, name: String, constants: Vec<Constant>) -> Self {
        Self {
            package,
            name,
            constants,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `package.Name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    pub fn get(&self, identifier: &str) -> Option<&ConfigValue> {
        self.constants
            .iter()
            .find(|c| c.identifier == identifier)
            .map(|c| &c.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constant> {
        self.constants.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|c| c.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
