//! Resource declarations and the accessor table they compile to.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

// ── Input ────────────────────────────────────────────────────────────────────

/// One declaration in a resource manifest.
///
/// Named entries carry inline content under an authored id. Anonymous entries
/// reference a whole file whose path becomes the value.
///
/// Deserializes from `{ id, value }` or `{ path }` (alias `source`). Any other
/// key, or a mix of the two shapes, is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResourceEntry {
    Named { id: String, value: String },
    Anonymous { source: String },
}

/// Every key either shape may use; the shape is decided after reading.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    id: Option<String>,
    value: Option<String>,
    #[serde(alias = "path")]
    source: Option<String>,
}

impl TryFrom<EntryRecord> for ResourceEntry {
    type Error = String;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        match (record.id, record.value, record.source) {
            (Some(id), Some(value), None) => Ok(Self::Named { id, value }),
            (None, None, Some(source)) => Ok(Self::Anonymous { source }),
            (Some(id), _, Some(source)) => Err(format!(
                "entry '{id}' has both `id` and `path` ('{source}'); use one shape"
            )),
            (None, Some(_), Some(source)) => Err(format!(
                "entry '{source}' has both `value` and `path`; use one shape"
            )),
            (Some(id), None, None) => Err(format!("entry '{id}' has no `value`")),
            (None, Some(value), None) => Err(format!("entry with value '{value}' has no `id`")),
            (None, None, None) => Err("entry needs `id` and `value`, or `path`".into()),
        }
    }
}

impl<'de> Deserialize<'de> for ResourceEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        EntryRecord::deserialize(deserializer)?
            .try_into()
            .map_err(D::Error::custom)
    }
}

impl ResourceEntry {
    pub fn named(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Named {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn anonymous(source: impl Into<String>) -> Self {
        Self::Anonymous {
            source: source.into(),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named { .. })
    }
}

/// Ordered resource declarations under one namespace (e.g. `style`).
///
/// Namespace segments are dot-separated; the empty namespace is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceManifest {
    namespace: String,
    #[serde(default)]
    entries: Vec<ResourceEntry>,
}

impl ResourceManifest {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: ResourceEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn push(&mut self, entry: ResourceEntry) {
        self.entries.push(entry);
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Output ───────────────────────────────────────────────────────────────────

/// Resolved accessor payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResourceValue {
    Text(String),
    Path(String),
}

impl ResourceValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Path(s) => s,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    key: String,
    value: ResourceValue,
}

impl Accessor {
    pub fn new(key: impl Into<String>, value: ResourceValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &ResourceValue {
        &self.value
    }
}

/// Ordered accessors for one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceArtifact {
    namespace: String,
    accessors: Vec<Accessor>,
}

impl ResourceArtifact {
    pub(crate) fn new(namespace: String, accessors: Vec<Accessor>) -> Self {
        Self {
            namespace,
            accessors,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.accessors
            .iter()
            .find(|a| a.key == key)
            .map(|a| &a.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Accessor> {
        self.accessors.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|a| a.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_deserialize_by_shape() {
        let named: ResourceEntry =
            serde_json::from_str(r#"{"id":"label","value":"label"}"#).unwrap();
        let by_path: ResourceEntry = serde_json::from_str(r#"{"path":"some.css"}"#).unwrap();
        let by_source: ResourceEntry = serde_json::from_str(r#"{"source":"a.css"}"#).unwrap();

        assert_eq!(named, ResourceEntry::named("label", "label"));
        assert_eq!(by_path, ResourceEntry::anonymous("some.css"));
        assert_eq!(by_source, ResourceEntry::anonymous("a.css"));
    }

    #[test]
    fn entries_reject_mixed_or_unknown_keys() {
        for bad in [
            r#"{"id":"text-field","path":"some.css"}"#,
            r#"{"id":"label","value":"label","source":"a.css"}"#,
            r#"{"value":"x","path":"a.css"}"#,
            r#"{"id":"label"}"#,
            r#"{"value":"label"}"#,
            r#"{}"#,
            r#"{"id":"label","vlaue":"label"}"#,
            r#"{"path":"a.css","comment":"x"}"#,
        ] {
            assert!(
                serde_json::from_str::<ResourceEntry>(bad).is_err(),
                "{bad} should be rejected"
            );
        }

        let err = serde_json::from_str::<ResourceEntry>(r#"{"id":"text-field","path":"some.css"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("both `id` and `path`"), "{err}");
    }

    #[test]
    fn entries_serialize_without_tags() {
        let json = serde_json::to_string(&ResourceEntry::anonymous("a.css")).unwrap();
        assert_eq!(json, r#"{"source":"a.css"}"#);
        let back: ResourceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResourceEntry::anonymous("a.css"));
    }

    #[test]
    fn manifest_rejects_unknown_keys() {
        assert!(
            serde_json::from_str::<ResourceManifest>(r#"{"namespace":"a","entires":[]}"#).is_err()
        );
    }

    #[test]
    fn value_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ResourceValue::Path("/style/some.css".into())).unwrap();
        assert_eq!(json, r#"{"kind":"path","value":"/style/some.css"}"#);
    }
}
