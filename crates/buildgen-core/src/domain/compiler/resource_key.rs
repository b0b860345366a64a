//! Accessor key derivation for resource entries.
//!
//! Named entries keep their authored id with hyphens turned into underscores.
//! Anonymous entries synthesize `_<stem>` from the file name so they never
//! shadow a named entry, and carry the resolved path as their value.

use crate::domain::{
    entities::{Accessor, KeyOptions, ResourceEntry, ResourceValue},
    error::DomainError,
    identifier,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceKeyDeriver {
    options: KeyOptions,
}

impl ResourceKeyDeriver {
    pub fn new(options: KeyOptions) -> Self {
        Self { options }
    }

    /// Derive the accessor for the entry at `position` (1-based) in
    /// `namespace`.
    ///
    /// # Errors
    ///
    /// `InvalidIdentifier` if the derived key is empty or not an identifier.
    pub fn derive(
        &self,
        entry: &ResourceEntry,
        namespace: &str,
        position: usize,
    ) -> Result<Accessor, DomainError> {
        let (key, value) = match entry {
            ResourceEntry::Named { id, value } => {
                (identifier::normalize_hyphens(id), ResourceValue::Text(value.clone()))
            }
            ResourceEntry::Anonymous { source } => (
                format!("_{}", identifier::normalize_hyphens(file_stem(source))),
                ResourceValue::Path(resolve_path(namespace, source)),
            ),
        };

        let key = if self.options.uppercase_keys {
            key.to_uppercase()
        } else {
            key
        };

        identifier::ensure_identifier(&key, || {
            format!("resource entry #{position} in '{namespace}'")
        })?;

        Ok(Accessor::new(key, value))
    }
}

/// Base name without its last extension. A leading dot is not an extension.
fn file_stem(source: &str) -> &str {
    let base = source.rsplit('/').next().unwrap_or(source);
    match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    }
}

/// `/`-rooted sources are already resolved; others live under the namespace.
fn resolve_path(namespace: &str, source: &str) -> String {
    if source.starts_with('/') {
        return source.to_owned();
    }

    let mut path = String::with_capacity(namespace.len() + source.len() + 2);
    for segment in namespace.split('.').filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(segment);
    }
    path.push('/');
    path.push_str(source);
    path
}
