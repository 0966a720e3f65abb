//! Derives a module name from a file path.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, Vue3ScanError};
use crate::path_utils::{display_path, normalize_separators};

/// Module for files outside the module path convention.
pub const NON_MODULE: &str = "non-module";

/// Default convention: the directory directly under `src/components`.
pub const DEFAULT_MODULE_PATTERN: &str = "src/components/([^/]+)";

/// What to do with a file that does not match the module pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleFallback {
    /// Pool into the reserved [`NON_MODULE`] module.
    #[default]
    Pool,
    /// Use the name of the containing directory.
    ParentDir,
}

#[derive(Debug, Clone)]
pub struct ModuleClassifier {
    pattern: Regex,
    fallback: ModuleFallback,
}

impl ModuleClassifier {
    /// Build a classifier from a pattern whose first capture group is the module name.
    ///
    /// # Errors
    /// Returns an error if the pattern is invalid or has no capture group.
    pub fn new(pattern: &str, fallback: ModuleFallback) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Vue3ScanError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;
        if regex.captures_len() < 2 {
            return Err(Vue3ScanError::Config(format!(
                "Module pattern '{pattern}' must contain a capture group for the module name"
            )));
        }

        Ok(Self {
            pattern: regex,
            fallback,
        })
    }

    /// Classify a path on its own; the fallback sees the same path.
    #[must_use]
    pub fn classify(&self, path: &str) -> String {
        self.classify_in(path, Path::new(""))
    }

    /// Classify a file found under `root`.
    ///
    /// The pattern is matched against the full path, so a root below the
    /// project (e.g. `src/`) still yields module names. The parent-dir
    /// fallback uses the root-relative path: files directly in `root` pool.
    #[must_use]
    pub fn classify_in(&self, path: &str, root: &Path) -> String {
        let path = normalize_separators(path);

        if let Some(name) = self
            .pattern
            .captures(&path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
        {
            return name.to_string();
        }

        match self.fallback {
            ModuleFallback::Pool => NON_MODULE.to_string(),
            ModuleFallback::ParentDir => {
                let relative = display_path(&path, root);
                parent_dir_name(&relative).unwrap_or(NON_MODULE).to_string()
            }
        }
    }
}

fn parent_dir_name(path: &str) -> Option<&str> {
    let (dir, _) = path.rsplit_once('/')?;
    dir.rsplit('/')
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
