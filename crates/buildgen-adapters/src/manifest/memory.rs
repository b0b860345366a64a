//! In-memory project source for testing.

use buildgen_core::{
    application::ports::ProjectSource, domain::ProjectManifest, error::BuildgenResult,
};

/// Hands out a clone of a manifest built in code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectSource {
    name: String,
    manifest: ProjectManifest,
}

impl InMemoryProjectSource {
    pub fn new(manifest: ProjectManifest) -> Self {
        Self {
            name: "<memory>".into(),
            manifest,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ProjectSource for InMemoryProjectSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> BuildgenResult<ProjectManifest> {
        Ok(self.manifest.clone())
    }
}
