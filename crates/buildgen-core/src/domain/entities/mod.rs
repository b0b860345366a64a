pub mod artifact;
pub mod build_config;
pub mod project;
pub mod resource;

pub use artifact::{Artifact, Constant, FieldOrigin};
pub use build_config::{BuildConfigSpec, BuildConfigSpecBuilder, CustomField, DEFAULT_CLASS_NAME};
pub use project::{
    CssOptions, GenerationReport, JsonOptions, KeyOptions, ProjectManifest, PropertiesOptions,
    ResourceDirectory, ScanOptions,
};
pub use resource::{Accessor, ResourceArtifact, ResourceEntry, ResourceManifest, ResourceValue};
