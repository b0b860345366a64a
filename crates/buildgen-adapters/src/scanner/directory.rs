//! Filesystem resource scanner.

use std::{fs, path::Path};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use buildgen_core::{
    application::{ApplicationError, ports::ResourceScanner},
    domain::{ResourceManifest, ScanOptions},
    error::{BuildgenResult, Context},
};

use super::{Collector, is_hidden};

/// Walks a resource directory with `walkdir`, sorted by file name.
///
/// Hidden entries and excluded paths are pruned before descent. Symlinks are
/// not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn new() -> Self {
        Self
    }
}

/// Slash-separated path of `path` relative to `root`.
fn relative(root: &Path, path: &Path) -> BuildgenResult<String> {
    let rel = path
        .strip_prefix(root)
        .context(format!("relativise '{}'", path.display()))?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

impl ResourceScanner for DirectoryScanner {
    #[instrument(skip(self, options), fields(root = %root.display()))]
    fn scan(&self, root: &Path, options: &ScanOptions) -> BuildgenResult<Vec<ResourceManifest>> {
        if !root.is_dir() {
            return Err(ApplicationError::DirectoryNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                match relative(root, entry.path()) {
                    Ok(rel) => !is_hidden(&rel) && !options.is_excluded(&rel),
                    Err(_) => false,
                }
            });

        let mut collector = Collector::new();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| ApplicationError::ScanFailed {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }

            let rel = relative(root, entry.path())?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if collector.directory(&rel)?.is_none() {
                    walker.skip_current_dir();
                }
            } else if file_type.is_file() {
                let path = entry.path();
                collector.file(&rel, path, options, || {
                    fs::read_to_string(path).map_err(|e| {
                        ApplicationError::InvalidResource {
                            path: path.to_path_buf(),
                            reason: e.to_string(),
                        }
                        .into()
                    })
                })?;
            } else {
                debug!(path = %rel, "Skipping non-regular file");
            }
        }

        Ok(collector.finish())
    }
}
