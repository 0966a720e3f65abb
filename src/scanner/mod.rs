//! Per-file breaking-change detection.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::catalog::PatternCatalog;
use crate::error::{Result, Vue3ScanError};
use crate::path_utils::normalize_separators;
use crate::scoring::ComplexityScorer;

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileScanResult {
    pub path: String,
    pub triggered: BTreeSet<u32>,
    pub complexity_score: u32,
}

impl FileScanResult {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.triggered.is_empty()
    }
}

/// Tests file content against every category of a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FileScanner<'a> {
    catalog: &'a PatternCatalog,
    scorer: &'a ComplexityScorer,
}

impl<'a> FileScanner<'a> {
    #[must_use]
    pub const fn new(catalog: &'a PatternCatalog, scorer: &'a ComplexityScorer) -> Self {
        Self { catalog, scorer }
    }

    /// Scan already-loaded content. Pure: the same content always yields the same result.
    #[must_use]
    pub fn scan_content(&self, path: &str, content: &str) -> FileScanResult {
        let triggered: BTreeSet<u32> = self
            .catalog
            .iter()
            .filter(|category| category.is_triggered_by(content))
            .map(crate::catalog::BreakingChange::ordinal)
            .collect();
        let complexity_score = self.scorer.score(triggered.iter().copied());

        FileScanResult {
            path: path.to_string(),
            triggered,
            complexity_score,
        }
    }

    /// Read and scan a file. Invalid UTF-8 sequences are replaced, not rejected.
    ///
    /// # Errors
    /// Returns [`Vue3ScanError::FileRead`] if the file cannot be read.
    pub fn scan_file(&self, path: &Path) -> Result<FileScanResult> {
        let bytes = fs::read(path).map_err(|source| Vue3ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        let display = normalize_separators(&path.to_string_lossy());

        Ok(self.scan_content(&display, &content))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
