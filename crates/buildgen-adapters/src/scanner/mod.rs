//! Resource scanner adapters.
//!
//! Both scanners share one collection pass: every directory maps to a
//! manifest, and every file contributes extractor-named entries followed by
//! one anonymous entry for the file itself.
//!
//! A directory's namespace is its parent's namespace plus its own name
//! rewritten into an identifier (`my-icons` → `my_icons`), joined with `.`.
//! Directories whose name cannot be rewritten are skipped with everything
//! below them. Two sources that land on the same namespace are an error.

mod directory;
mod extract;
mod memory;

pub use directory::DirectoryScanner;
pub use memory::MemoryScanner;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, warn};

use buildgen_core::{
    application::ApplicationError,
    domain::{
        PropertiesOptions, ResourceEntry, ResourceManifest, ScanOptions,
        identifier::{is_identifier, normalize_hyphens, to_identifier},
    },
    error::BuildgenResult,
};

use extract::Extractor;

/// Whether any segment of a slash-separated relative path is hidden.
pub(crate) fn is_hidden(relative: &str) -> bool {
    relative.split('/').any(|segment| segment.starts_with('.'))
}

fn child_namespace(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

fn stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}

/// Accumulates manifests per namespace in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    manifests: Vec<ResourceManifest>,
    named: Vec<HashSet<String>>,
    /// What produced each slot, for collision reports.
    origins: Vec<String>,
    by_namespace: HashMap<String, usize>,
    /// Relative directory → slot, `None` once skipped.
    dirs: HashMap<String, Option<usize>>,
}

impl Collector {
    pub(crate) fn new() -> Self {
        let mut collector = Self::default();
        collector.by_namespace.insert(String::new(), 0);
        collector.dirs.insert(String::new(), Some(0));
        collector.manifests.push(ResourceManifest::new(""));
        collector.named.push(HashSet::new());
        collector.origins.push("/".into());
        collector
    }

    /// Slot for `namespace`, created on first use.
    ///
    /// # Errors
    ///
    /// `NamespaceCollision` when a different `origin` already owns it.
    fn claim(&mut self, namespace: String, origin: String) -> BuildgenResult<usize> {
        if let Some(&slot) = self.by_namespace.get(&namespace) {
            if self.origins[slot] == origin {
                return Ok(slot);
            }
            return Err(ApplicationError::NamespaceCollision {
                namespace,
                first: self.origins[slot].clone(),
                second: origin,
            }
            .into());
        }
        let slot = self.manifests.len();
        self.manifests.push(ResourceManifest::new(namespace.clone()));
        self.named.push(HashSet::new());
        self.origins.push(origin);
        self.by_namespace.insert(namespace, slot);
        Ok(slot)
    }

    /// Register a directory by relative path (`""` is the root).
    ///
    /// Returns `None` when the directory, or one of its ancestors, has a name
    /// that cannot form a namespace.
    pub(crate) fn directory(&mut self, relative_dir: &str) -> BuildgenResult<Option<usize>> {
        if let Some(&slot) = self.dirs.get(relative_dir) {
            return Ok(slot);
        }

        let (parent, name) = relative_dir.rsplit_once('/').unwrap_or(("", relative_dir));
        let slot = match self.directory(parent)? {
            None => None,
            Some(parent_slot) => match to_identifier(name) {
                Some(segment) => {
                    let namespace =
                        child_namespace(self.manifests[parent_slot].namespace(), &segment);
                    Some(self.claim(namespace, format!("{relative_dir}/"))?)
                }
                None => {
                    warn!(dir = %relative_dir, "Directory name cannot form a namespace; skipped");
                    None
                }
            },
        };

        self.dirs.insert(relative_dir.to_owned(), slot);
        Ok(slot)
    }

    /// Slot for the resource bundle `file_name` belongs to, or `dir_slot`
    /// when it is not a locale variant.
    fn bundle(&mut self, dir: &str, dir_slot: usize, file_name: &str) -> BuildgenResult<usize> {
        let Some(bundle) = PropertiesOptions::bundle_name(stem(file_name)) else {
            return Ok(dir_slot);
        };
        let Some(segment) = to_identifier(bundle) else {
            warn!(dir = %dir, bundle = %bundle, "Bundle name cannot form a namespace; keys stay in the directory");
            return Ok(dir_slot);
        };
        let namespace = child_namespace(self.manifests[dir_slot].namespace(), &segment);
        let origin = if dir.is_empty() {
            format!("{bundle}_*.properties")
        } else {
            format!("{dir}/{bundle}_*.properties")
        };
        self.claim(namespace, origin)
    }

    /// Add a file given its slash-separated path relative to the scan root.
    ///
    /// `read` is only called when an extractor applies. `origin` names the
    /// file in errors.
    pub(crate) fn file(
        &mut self,
        relative: &str,
        origin: &Path,
        options: &ScanOptions,
        read: impl FnOnce() -> BuildgenResult<String>,
    ) -> BuildgenResult<()> {
        let (dir, file_name) = relative.rsplit_once('/').unwrap_or(("", relative));
        let Some(slot) = self.directory(dir)? else {
            debug!(file = %relative, "Skipping file under an unusable directory");
            return Ok(());
        };

        if let Some(extractor) = Extractor::for_file(file_name, options) {
            let content = read()?;
            let ids = extractor
                .extract(&content)
                .map_err(|reason| ApplicationError::InvalidResource {
                    path: origin.to_path_buf(),
                    reason,
                })?;
            debug!(file = %relative, candidates = ids.len(), "Extracted resource names");

            let target = match extractor {
                Extractor::Properties if options.properties.resource_bundle => {
                    self.bundle(dir, slot, file_name)?
                }
                _ => slot,
            };

            for id in ids {
                if !is_identifier(&normalize_hyphens(&id)) {
                    debug!(file = %relative, id = %id, "Skipping name that is not an identifier");
                    continue;
                }
                // Repeated names (e.g. a selector styled twice) collapse into one entry.
                if self.named[target].insert(id.clone()) {
                    self.manifests[target].push(ResourceEntry::named(id.clone(), id));
                }
            }
        }

        let key_stem = normalize_hyphens(stem(file_name));
        if is_identifier(&format!("_{key_stem}")) {
            self.manifests[slot].push(ResourceEntry::anonymous(format!("/{relative}")));
        } else {
            warn!(file = %relative, "File name cannot form an accessor key; skipped");
        }
        Ok(())
    }

    /// Manifests that received at least one entry.
    pub(crate) fn finish(self) -> Vec<ResourceManifest> {
        self.manifests
            .into_iter()
            .filter(|manifest| !manifest.is_empty())
            .collect()
    }
}
