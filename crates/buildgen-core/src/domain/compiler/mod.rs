//! The two generation compilers and the key deriver they share.
//!
//! Compilers are pure: they hold shared references to immutable registries,
//! perform no I/O and return their artifact by value. Independent compiles may
//! run concurrently.

pub mod constants;
pub mod resource_key;
pub mod resources;

pub use constants::ConstantTableCompiler;
pub use resource_key::ResourceKeyDeriver;
pub use resources::ResourceTableCompiler;
