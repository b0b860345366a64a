//! Project-level aggregates: the resolved manifest and the generation report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Artifact, BuildConfigSpec, ResourceArtifact, ResourceManifest},
    naming::NamingScheme,
};

// ── Options ──────────────────────────────────────────────────────────────────

/// Resource key derivation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyOptions {
    /// Upper-case keys after hyphen normalization (`_some` → `_SOME`).
    pub uppercase_keys: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssOptions {
    pub class_selectors: bool,
    pub id_selectors: bool,
    pub element_selectors: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            class_selectors: true,
            id_selectors: true,
            element_selectors: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonOptions {
    /// Extract top-level keys from `.json` files at all.
    pub enabled: bool,
    /// Descend into nested objects.
    pub recursive: bool,
    /// Descend into objects held in arrays (only with `recursive`).
    pub arrays: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            recursive: false,
            arrays: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertiesOptions {
    /// Extract keys from `.properties` files at all.
    pub enabled: bool,
    /// Group locale variants (`messages_en.properties`, `messages_fr.properties`)
    /// into one nested `messages` namespace holding the union of their keys.
    pub resource_bundle: bool,
}

impl Default for PropertiesOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            resource_bundle: false,
        }
    }
}

impl PropertiesOptions {
    /// Bundle name of a locale variant stem: `messages_en` → `messages`.
    ///
    /// A stem is a variant when its last `_` is followed by exactly two
    /// characters and preceded by a non-empty name.
    pub fn bundle_name(stem: &str) -> Option<&str> {
        let (name, locale) = stem.rsplit_once('_')?;
        (!name.is_empty() && locale.chars().count() == 2).then_some(name)
    }
}

/// How a resource directory is turned into manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    /// Paths relative to the scanned root to skip, files or whole directories.
    pub exclude: Vec<String>,
    pub css: CssOptions,
    pub properties: PropertiesOptions,
    pub json: JsonOptions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            css: CssOptions::default(),
            properties: PropertiesOptions::default(),
            json: JsonOptions::default(),
        }
    }
}

impl ScanOptions {
    /// Whether `relative` (slash-separated) is excluded or lies under an
    /// excluded directory.
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|pattern| {
            let pattern = pattern.trim_matches('/');
            !pattern.is_empty()
                && (relative == pattern
                    || relative
                        .strip_prefix(pattern)
                        .is_some_and(|rest| rest.starts_with('/')))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDirectory {
    path: PathBuf,
    options: ScanOptions,
}

impl ResourceDirectory {
    pub fn new(path: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }
}

// ── ProjectManifest ──────────────────────────────────────────────────────────

/// Everything one generation pass needs, as resolved by a `ProjectSource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectManifest {
    build_configs: Vec<BuildConfigSpec>,
    schemes: Vec<NamingScheme>,
    resource_sets: Vec<ResourceManifest>,
    resource_dirs: Vec<ResourceDirectory>,
    key_options: KeyOptions,
}

impl ProjectManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_config(mut self, config: BuildConfigSpec) -> Self {
        self.build_configs.push(config);
        self
    }

    pub fn with_scheme(mut self, scheme: NamingScheme) -> Self {
        self.schemes.push(scheme);
        self
    }

    pub fn with_resource_set(mut self, manifest: ResourceManifest) -> Self {
        self.resource_sets.push(manifest);
        self
    }

    pub fn with_resource_dir(mut self, dir: ResourceDirectory) -> Self {
        self.resource_dirs.push(dir);
        self
    }

    pub fn with_key_options(mut self, options: KeyOptions) -> Self {
        self.key_options = options;
        self
    }

    pub fn build_configs(&self) -> &[BuildConfigSpec] {
        &self.build_configs
    }

    pub fn schemes(&self) -> &[NamingScheme] {
        &self.schemes
    }

    pub fn resource_sets(&self) -> &[ResourceManifest] {
        &self.resource_sets
    }

    pub fn resource_dirs(&self) -> &[ResourceDirectory] {
        &self.resource_dirs
    }

    pub fn key_options(&self) -> KeyOptions {
        self.key_options
    }

    pub fn is_empty(&self) -> bool {
        self.build_configs.is_empty()
            && self.resource_sets.is_empty()
            && self.resource_dirs.is_empty()
    }
}

// ── GenerationReport ─────────────────────────────────────────────────────────

/// The complete output of one successful pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub artifacts: Vec<Artifact>,
    pub resources: Vec<ResourceArtifact>,
}

impl GenerationReport {
    pub fn constant_count(&self) -> usize {
        self.artifacts.iter().map(Artifact::len).sum()
    }

    pub fn accessor_count(&self) -> usize {
        self.resources.iter().map(ResourceArtifact::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty() && self.resources.is_empty()
    }
}
