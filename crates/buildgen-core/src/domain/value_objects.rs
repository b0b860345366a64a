//! Domain value objects: ValueKind, ConfigValue, RawLiteral, Role.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. A
//! [`ConfigValue`] is built once from a [`RawLiteral`] and its kind never
//! changes afterwards. Formatting for emission lives here as well, paired with
//! a parser so every emitted literal reads back to an equal value.
//!
//! # Adding New Kinds
//!
//! 1. Add the `ValueKind` variant and its `as_str` / `FromStr` arms
//! 2. Add the `ConfigValue` variant and its `construct`, `literal` and
//!    `parse_literal` arms
//! 3. Add a suggestion line in `DomainError::suggestions`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_F64_INT: u64 = 1 << 53;

// ── ValueKind ────────────────────────────────────────────────────────────────

/// The declared type of a generated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Bool,
    Int,
    Double,
}

impl ValueKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(Self::String),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" | "long" => Ok(Self::Int),
            "double" | "float" => Ok(Self::Double),
            other => Err(DomainError::UnknownValueKind {
                name: other.to_owned(),
            }),
        }
    }
}

// ── RawLiteral ───────────────────────────────────────────────────────────────

/// A literal as it arrives from a configuration source, before typing.
///
/// Deserialises untagged so TOML/JSON scalars map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLiteral {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawLiteral {
    fn describe(&self) -> String {
        match self {
            Self::Bool(b) => format!("bool {b}"),
            Self::Integer(i) => format!("integer {i}"),
            Self::Float(x) => format!("float {x:?}"),
            Self::Text(s) => format!("text '{s}'"),
        }
    }
}

impl From<&str> for RawLiteral {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RawLiteral {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for RawLiteral {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RawLiteral {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for RawLiteral {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

// ── ConfigValue ──────────────────────────────────────────────────────────────

/// A typed literal holding exactly one value of its kind.
///
/// Derived `PartialEq` never matches across variants, so `Double(12.0)` is
/// not equal to `Int(12)`. Use [`ConfigValue::try_eq`] when comparing values
/// whose kinds are not statically known to agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConfigValue {
    String(String),
    Bool(bool),
    Int(i64),
    Double(f64),
}

impl ConfigValue {
    /// Build a value of `kind` from a raw literal.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` when `raw` cannot be represented exactly in `kind`:
    /// non-numeric text for numbers, floats for `Int`, integers beyond 2^53
    /// for `Double`, non-finite doubles, or anything but `true`/`false` for
    /// `Bool`.
    pub fn construct(kind: ValueKind, raw: impl Into<RawLiteral>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let mismatch = |raw: &RawLiteral| DomainError::TypeMismatch {
            field: None,
            expected: kind,
            found: raw.describe(),
        };

        match (kind, &raw) {
            (ValueKind::String, RawLiteral::Text(s)) => Ok(Self::String(s.clone())),

            (ValueKind::Bool, RawLiteral::Bool(b)) => Ok(Self::Bool(*b)),
            (ValueKind::Bool, RawLiteral::Text(s)) => match s.as_str() {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(mismatch(&raw)),
            },

            (ValueKind::Int, RawLiteral::Integer(i)) => Ok(Self::Int(*i)),
            (ValueKind::Int, RawLiteral::Text(s)) => {
                s.trim().parse::<i64>().map(Self::Int).map_err(|_| mismatch(&raw))
            }

            (ValueKind::Double, RawLiteral::Float(x)) if x.is_finite() => Ok(Self::Double(*x)),
            (ValueKind::Double, RawLiteral::Integer(i)) if i.unsigned_abs() <= MAX_EXACT_F64_INT => {
                Ok(Self::Double(*i as f64))
            }
            (ValueKind::Double, RawLiteral::Text(s)) => match s.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Self::Double(x)),
                _ => Err(mismatch(&raw)),
            },

            _ => Err(mismatch(&raw)),
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Kind-checked equality.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` when the two values have different kinds; comparing an
    /// `Int` with a `Double` is a caller error, not `false`.
    pub fn try_eq(&self, other: &Self) -> Result<bool, DomainError> {
        if self.kind() != other.kind() {
            return Err(DomainError::TypeMismatch {
                field: None,
                expected: self.kind(),
                found: format!("{} value {}", other.kind(), other.literal()),
            });
        }
        Ok(self == other)
    }

    /// Source literal for emission.
    ///
    /// Strings are quoted and escaped; doubles always carry a decimal point
    /// or exponent so they never read back as integers.
    pub fn literal(&self) -> String {
        match self {
            Self::String(s) => quote(s),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            // `{:?}` on f64 is the shortest representation that round-trips.
            Self::Double(x) => format!("{x:?}"),
        }
    }

    /// Parse a literal produced by [`ConfigValue::literal`].
    pub fn parse_literal(kind: ValueKind, literal: &str) -> Result<Self, DomainError> {
        match kind {
            ValueKind::String => unquote(literal).map(Self::String).ok_or_else(|| {
                DomainError::TypeMismatch {
                    field: None,
                    expected: kind,
                    found: format!("malformed string literal {literal}"),
                }
            }),
            _ => Self::construct(kind, literal),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            other => f.write_str(&other.literal()),
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                _ => return None,
            },
            '"' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

// ── Role ─────────────────────────────────────────────────────────────────────

/// Canonical build-identity fields.
///
/// The first four are always emitted; the descriptive roles only when the
/// configuration sets them. Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Name,
    Group,
    Version,
    Debug,
    Artifact,
    Description,
    Email,
    Url,
}

impl Role {
    pub const COUNT: usize = 8;

    pub const ALL: [Role; Self::COUNT] = [
        Self::Name,
        Self::Group,
        Self::Version,
        Self::Debug,
        Self::Artifact,
        Self::Description,
        Self::Email,
        Self::Url,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Group => "group",
            Self::Version => "version",
            Self::Debug => "debug",
            Self::Artifact => "artifact",
            Self::Description => "description",
            Self::Email => "email",
            Self::Url => "url",
        }
    }

    /// Identifier under the default naming scheme.
    pub const fn default_identifier(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Group => "GROUP",
            Self::Version => "VERSION",
            Self::Debug => "DEBUG",
            Self::Artifact => "ARTIFACT",
            Self::Description => "DESC",
            Self::Email => "EMAIL",
            Self::Url => "URL",
        }
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Group | Self::Version | Self::Debug)
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Debug => ValueKind::Bool,
            _ => ValueKind::String,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Accepts the lowercase role name or its default identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| {
                s.eq_ignore_ascii_case(role.as_str()) || s == role.default_identifier()
            })
            .ok_or_else(|| DomainError::InvalidIdentifier {
                identifier: s.to_owned(),
                origin: "naming scheme role (name, group, version, debug, artifact, \
                         description, email, url)"
                    .into(),
            })
    }
}
