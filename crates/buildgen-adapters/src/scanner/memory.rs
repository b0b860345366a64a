//! In-memory resource scanner for testing.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

use buildgen_core::{
    application::{ApplicationError, ports::ResourceScanner},
    domain::{ResourceManifest, ScanOptions},
    error::BuildgenResult,
};

use super::{Collector, is_hidden};

/// Serves resource trees from memory, keyed by root path.
///
/// Files are visited in the same order a sorted directory walk would use.
#[derive(Debug, Clone, Default)]
pub struct MemoryScanner {
    trees: HashMap<PathBuf, BTreeMap<String, String>>,
}

impl MemoryScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at `relative` (slash-separated) under `root`.
    pub fn with_file(
        mut self,
        root: impl Into<PathBuf>,
        relative: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.trees
            .entry(root.into())
            .or_default()
            .insert(relative.into(), content.into());
        self
    }
}

impl ResourceScanner for MemoryScanner {
    fn scan(&self, root: &Path, options: &ScanOptions) -> BuildgenResult<Vec<ResourceManifest>> {
        let tree = self
            .trees
            .get(root)
            .ok_or_else(|| ApplicationError::DirectoryNotFound {
                path: root.to_path_buf(),
            })?;

        let mut files: Vec<(&String, &String)> = tree
            .iter()
            .filter(|(rel, _)| !is_hidden(rel) && !options.is_excluded(rel))
            .collect();
        files.sort_by(|(a, _), (b, _)| a.split('/').cmp(b.split('/')));

        let mut collector = Collector::new();
        for (rel, content) in files {
            let mut prefix = String::new();
            for segment in rel.split('/').rev().skip(1).collect::<Vec<_>>().into_iter().rev() {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(segment);
                collector.directory(&prefix)?;
            }
            collector.file(rel, &root.join(rel), options, || Ok(content.clone()))?;
        }

        Ok(collector.finish())
    }
}
