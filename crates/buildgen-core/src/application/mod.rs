//! Application layer for buildgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationService,
    SchemeInfo, // DTO for scheme listings
};

// Re-export port traits (for adapter implementation)
pub use ports::{ProjectSource, ResourceScanner};

pub use error::ApplicationError;
