//! Project manifest sources.

mod memory;
mod toml_source;

pub use memory::InMemoryProjectSource;
pub use toml_source::{DEFAULT_MANIFEST_NAME, TomlProjectSource};
