//! Generation Service - main application orchestrator.
//!
//! This service coordinates one generation pass:
//! 1. Load the project manifest
//! 2. Build the scheme registry (built-ins plus manifest schemes)
//! 3. Compile every build config into a constant table
//! 4. Compile inline and scanned resource manifests into accessor tables
//!
//! Any failure aborts the pass; no partial report is returned.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ProjectSource, ResourceScanner},
    },
    domain::{
        ConstantTableCompiler, DEFAULT_SCHEME, DomainValidator as validator, GenerationReport,
        NamingScheme, ProjectManifest, ResourceKeyDeriver, ResourceManifest,
        ResourceTableCompiler, Role, SchemeRegistry,
    },
    error::BuildgenResult,
};

/// Information about a naming scheme for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeInfo {
    pub id: String,
    pub builtin: bool,
    pub mappings: Vec<(Role, String)>,
}

impl SchemeInfo {
    fn from_scheme(scheme: &NamingScheme, builtin: bool) -> Self {
        Self {
            id: scheme.id().to_owned(),
            builtin,
            mappings: scheme
                .mappings()
                .map(|(role, ident)| (role, ident.to_owned()))
                .collect(),
        }
    }
}

/// Main generation service.
pub struct GenerationService {
    source: Box<dyn ProjectSource>,
    scanner: Box<dyn ResourceScanner>,
    default_scheme: String,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(source: Box<dyn ProjectSource>, scanner: Box<dyn ResourceScanner>) -> Self {
        Self {
            source,
            scanner,
            default_scheme: DEFAULT_SCHEME.to_owned(),
        }
    }

    /// Scheme applied to build configs that do not name one.
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// Load the manifest and compile everything in it.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn generate(&self) -> BuildgenResult<GenerationReport> {
        let manifest = self.source.load()?;
        info!(
            build_configs = manifest.build_configs().len(),
            resource_sets = manifest.resource_sets().len(),
            resource_dirs = manifest.resource_dirs().len(),
            "Manifest loaded"
        );

        let report = self.compile(&manifest)?;

        info!(
            artifacts = report.artifacts.len(),
            constants = report.constant_count(),
            resource_tables = report.resources.len(),
            accessors = report.accessor_count(),
            "Generation completed successfully"
        );
        Ok(report)
    }

    /// Compile an already loaded manifest.
    ///
    /// Resource directories are scanned through the injected scanner.
    pub fn compile(&self, manifest: &ProjectManifest) -> BuildgenResult<GenerationReport> {
        if manifest.is_empty() {
            return Err(ApplicationError::NothingToGenerate {
                source_name: self.source.describe(),
            }
            .into());
        }

        let registry = Self::registry_for(manifest)?;
        let constants =
            ConstantTableCompiler::new(&registry).with_default_scheme(self.default_scheme.as_str());

        let mut report = GenerationReport::default();

        for (index, config) in manifest.build_configs().iter().enumerate() {
            let artifact = constants.compile(config).inspect_err(|e| {
                warn!(build_config = index + 1, error = %e, "Build config rejected");
            })?;
            debug!(
                artifact = %artifact.qualified_name(),
                constants = artifact.len(),
                "Constant table compiled"
            );
            report.artifacts.push(artifact);
        }

        let resources =
            ResourceTableCompiler::new(ResourceKeyDeriver::new(manifest.key_options()));

        for set in self.resource_manifests(manifest)? {
            let table = resources.compile(&set).inspect_err(|e| {
                warn!(namespace = %set.namespace(), error = %e, "Resource manifest rejected");
            })?;
            debug!(
                namespace = %table.namespace(),
                accessors = table.len(),
                "Resource table compiled"
            );
            report.resources.push(table);
        }

        Ok(report)
    }

    /// Built-in schemes plus those the manifest registers.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn list_schemes(&self) -> BuildgenResult<Vec<SchemeInfo>> {
        let manifest = self.source.load()?;
        let registry = Self::registry_for(&manifest)?;
        let builtin = SchemeRegistry::builtin();

        Ok(registry
            .iter()
            .map(|scheme| {
                let is_builtin = builtin.resolve(scheme.id()).is_ok();
                SchemeInfo::from_scheme(scheme, is_builtin)
            })
            .collect())
    }

    /// Schemes available without any manifest.
    pub fn builtin_schemes() -> Vec<SchemeInfo> {
        SchemeRegistry::builtin()
            .iter()
            .map(|scheme| SchemeInfo::from_scheme(scheme, true))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn registry_for(manifest: &ProjectManifest) -> BuildgenResult<SchemeRegistry> {
        let mut registry = SchemeRegistry::builtin();
        for scheme in manifest.schemes() {
            validator::validate_naming_scheme(scheme)?;
            registry.register(scheme.clone())?;
            debug!(scheme = %scheme.id(), "Registered naming scheme");
        }
        Ok(registry)
    }

    /// Inline sets first, then scanned directories in declaration order.
    fn resource_manifests(&self, manifest: &ProjectManifest) -> BuildgenResult<Vec<ResourceManifest>> {
        let mut sets = manifest.resource_sets().to_vec();

        for dir in manifest.resource_dirs() {
            let scanned = self.scanner.scan(dir.path(), dir.options())?;
            info!(
                path = %dir.path().display(),
                manifests = scanned.len(),
                "Resource directory scanned"
            );
            sets.extend(scanned);
        }

        Ok(sets)
    }
}
