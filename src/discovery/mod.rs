//! Finds the files a scan run should look at.

mod filter;
mod whitelist;

pub use filter::{FileFilter, GlobFilter};
pub use whitelist::Whitelist;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, Vue3ScanError};

/// Trait for enumerating candidate files under a root directory.
pub trait FileDiscovery {
    /// Return all matching file paths, sorted and without duplicates.
    ///
    /// # Errors
    /// Returns an error if `root` is not an existing directory.
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    whitelist: Option<Whitelist>,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            whitelist: None,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub fn with_whitelist(mut self, whitelist: Option<Whitelist>) -> Self {
        self.whitelist = whitelist.filter(|w| !w.is_empty());
        self
    }

    #[must_use]
    pub const fn with_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        self.filter.should_include(path)
            && self
                .whitelist
                .as_ref()
                .is_none_or(|w| w.allows(root, path))
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.accepts(root, e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.accepts(root, e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileDiscovery for DirectoryScanner<F> {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(Vue3ScanError::InvalidRoot(root.to_path_buf()));
        }

        let mut files = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        files.sort();
        files.dedup();

        tracing::debug!(root = %root.display(), count = files.len(), "discovered files");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
