//! Resource manifest → ordered accessor table.

use std::collections::HashMap;

use crate::domain::{
    compiler::ResourceKeyDeriver,
    entities::{ResourceArtifact, ResourceManifest},
    error::DomainError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceTableCompiler {
    deriver: ResourceKeyDeriver,
}

impl ResourceTableCompiler {
    pub fn new(deriver: ResourceKeyDeriver) -> Self {
        Self { deriver }
    }

    /// Derive every entry in declaration order.
    ///
    /// Path values are not checked for existence.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` from key derivation
    /// - `DuplicateKey` naming both 1-based positions when two entries derive
    ///   the same key
    pub fn compile(&self, manifest: &ResourceManifest) -> Result<ResourceArtifact, DomainError> {
        let namespace = manifest.namespace();
        let mut accessors = Vec::with_capacity(manifest.len());
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(manifest.len());

        for (index, entry) in manifest.entries().iter().enumerate() {
            let position = index + 1;
            let accessor = self.deriver.derive(entry, namespace, position)?;

            if let Some(&first) = positions.get(accessor.key()) {
                return Err(DomainError::DuplicateKey {
                    key: accessor.key().to_owned(),
                    namespace: namespace.to_owned(),
                    first,
                    second: position,
                });
            }
            positions.insert(accessor.key().to_owned(), position);
            accessors.push(accessor);
        }

        Ok(ResourceArtifact::new(namespace.to_owned(), accessors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{KeyOptions, ResourceEntry, ResourceValue};

    #[test]
    fn keeps_declaration_order() {
        let manifest = ResourceManifest::new("style")
            .with_entry(ResourceEntry::named("label", "label"))
            .with_entry(ResourceEntry::anonymous("a.css"))
            .with_entry(ResourceEntry::named("hyperlink", "hyperlink"));

        let artifact = ResourceTableCompiler::default().compile(&manifest).unwrap();
        assert_eq!(artifact.keys().collect::<Vec<_>>(), ["label", "_a", "hyperlink"]);
        assert_eq!(artifact.namespace(), "style");
    }

    #[test]
    fn normalized_named_ids_collide() {
        let manifest = ResourceManifest::new("style")
            .with_entry(ResourceEntry::named("text-field", "a"))
            .with_entry(ResourceEntry::named("label", "b"))
            .with_entry(ResourceEntry::named("text_field", "c"));

        assert_eq!(
            ResourceTableCompiler::default().compile(&manifest).unwrap_err(),
            DomainError::DuplicateKey {
                key: "text_field".into(),
                namespace: "style".into(),
                first: 1,
                second: 3,
            }
        );
    }

    #[test]
    fn named_entry_can_collide_with_anonymous_key() {
        let manifest = ResourceManifest::new("style")
            .with_entry(ResourceEntry::anonymous("some.css"))
            .with_entry(ResourceEntry::named("_some", "x"));

        assert!(matches!(
            ResourceTableCompiler::default().compile(&manifest),
            Err(DomainError::DuplicateKey { first: 1, second: 2, .. })
        ));
    }

    #[test]
    fn uppercase_keys_collide_after_case_folding() {
        let compiler = ResourceTableCompiler::new(ResourceKeyDeriver::new(KeyOptions {
            uppercase_keys: true,
        }));
        let manifest = ResourceManifest::new("style")
            .with_entry(ResourceEntry::named("Title", "a"))
            .with_entry(ResourceEntry::named("title", "b"));

        assert!(matches!(
            compiler.compile(&manifest),
            Err(DomainError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn missing_files_are_not_checked() {
        let manifest =
            ResourceManifest::new("nowhere").with_entry(ResourceEntry::anonymous("ghost.css"));
        let artifact = ResourceTableCompiler::default().compile(&manifest).unwrap();
        assert_eq!(
            artifact.get("_ghost"),
            Some(&ResourceValue::Path("/nowhere/ghost.css".into()))
        );
    }

    #[test]
    fn empty_manifest_compiles_to_empty_table() {
        let artifact = ResourceTableCompiler::default()
            .compile(&ResourceManifest::new("style"))
            .unwrap();
        assert!(artifact.is_empty());
    }
}
