//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `buildgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProjectSource`: resolves the project manifest
//!   - `ResourceScanner`: turns resource directories into manifests
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ProjectSource, ResourceScanner};

#[cfg(test)]
pub use output::{MockProjectSource, MockResourceScanner};
