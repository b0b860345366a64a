//! buildgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for buildgen, a
//! build-time generator that turns project metadata into typed constant
//! tables and resource manifests into accessor tables.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           buildgen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: ProjectSource, ResourceScanner)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   buildgen-adapters (Infrastructure)    │
//! │ (TomlProjectSource, DirectoryScanner)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ConstantTableCompiler, ResourceTable-  │
//! │  Compiler, NamingScheme, ConfigValue)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use buildgen_core::prelude::*;
//!
//! let registry = SchemeRegistry::builtin();
//! let config = BuildConfigSpec::builder()
//!     .name("Hello world!")
//!     .group("my.website")
//!     .version("2.0")
//!     .scheme(QUALIFIED_SCHEME)
//!     .typed_field("AN_INT", ValueKind::Int, 9_i64)?
//!     .build()?;
//!
//! let artifact = ConstantTableCompiler::new(&registry).compile(&config)?;
//! assert_eq!(artifact.get("APP_NAME"), Some(&ConfigValue::String("Hello world!".into())));
//! assert_eq!(artifact.get("DEBUG"), Some(&ConfigValue::Bool(false)));
//! # Ok::<(), DomainError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerationService, SchemeInfo,
        ports::{ProjectSource, ResourceScanner},
    };
    pub use crate::domain::{
        Artifact, BuildConfigSpec, ConfigValue, ConstantTableCompiler, CustomField, DomainError,
        GenerationReport, NamingScheme, ProjectManifest, QUALIFIED_SCHEME, ResourceArtifact,
        ResourceEntry, ResourceManifest, ResourceTableCompiler, ResourceValue, Role,
        SchemeRegistry, ValueKind,
    };
    pub use crate::error::{BuildgenError, BuildgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
