//! Rolls per-file scan results up into per-module and global statistics.

mod sort;

pub use sort::sort_by_ordinal;

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::catalog::PatternCatalog;
use crate::classifier::NON_MODULE;
use crate::scanner::FileScanResult;
use crate::scoring::{ComplexityBuckets, ComplexityScorer};

/// Files affected by one breaking-change category within a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub ordinal: u32,
    pub label: String,
    pub count: usize,
    pub files: Vec<String>,
    pub complexity_by_file: BTreeMap<String, u32>,
}

impl CategoryAggregate {
    #[must_use]
    pub fn new(ordinal: u32, label: String) -> Self {
        Self {
            ordinal,
            label,
            count: 0,
            files: Vec::new(),
            complexity_by_file: BTreeMap::new(),
        }
    }

    fn add(&mut self, path: &str, score: u32) {
        self.count += 1;
        self.files.push(path.to_string());
        self.complexity_by_file.insert(path.to_string(), score);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleAggregate {
    pub name: String,
    pub total_files: usize,
    pub issues_by_change: Vec<CategoryAggregate>,
    pub complexity: ComplexityBuckets,
}

impl ModuleAggregate {
    #[must_use]
    pub fn category(&self, ordinal: u32) -> Option<&CategoryAggregate> {
        self.issues_by_change.iter().find(|c| c.ordinal == ordinal)
    }
}

/// Fully computed and sorted result of a scan run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalAggregate {
    pub total_files: usize,
    pub issues_by_change: Vec<CategoryAggregate>,
    pub module_stats: BTreeMap<String, ModuleAggregate>,
}

impl GlobalAggregate {
    #[must_use]
    pub fn category(&self, ordinal: u32) -> Option<&CategoryAggregate> {
        self.issues_by_change.iter().find(|c| c.ordinal == ordinal)
    }

    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ModuleAggregate> {
        self.module_stats.get(name)
    }
}

#[derive(Debug, Default)]
struct ModuleAccumulator {
    total_files: usize,
    issues: HashMap<u32, CategoryAggregate>,
    scores: Vec<u32>,
}

/// Accumulates scan results for one run.
///
/// Not shared between threads: scan in parallel, then feed results through a
/// single `Aggregator` in a stable order.
#[derive(Debug)]
pub struct Aggregator<'a> {
    catalog: &'a PatternCatalog,
    seen: HashSet<String>,
    issues: HashMap<u32, CategoryAggregate>,
    modules: BTreeMap<String, ModuleAccumulator>,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        let mut modules = BTreeMap::new();
        modules.insert(NON_MODULE.to_string(), ModuleAccumulator::default());

        Self {
            catalog,
            seen: HashSet::new(),
            issues: HashMap::new(),
            modules,
        }
    }

    /// Record one file under `module`.
    ///
    /// Returns `false` and changes nothing if the path was already recorded.
    pub fn record(&mut self, module: &str, result: &FileScanResult) -> bool {
        if !self.seen.insert(result.path.clone()) {
            tracing::debug!(path = %result.path, "skipping file already recorded in this run");
            return false;
        }

        let catalog = self.catalog;
        let module_acc = self.modules.entry(module.to_string()).or_default();
        module_acc.total_files += 1;
        if result.has_issues() {
            module_acc.scores.push(result.complexity_score);
        }

        for &ordinal in &result.triggered {
            let label = || label_for(catalog, ordinal);
            self.issues
                .entry(ordinal)
                .or_insert_with(|| CategoryAggregate::new(ordinal, label()))
                .add(&result.path, result.complexity_score);
            module_acc
                .issues
                .entry(ordinal)
                .or_insert_with(|| CategoryAggregate::new(ordinal, label()))
                .add(&result.path, result.complexity_score);
        }

        true
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.seen.len()
    }

    /// Compute module buckets and order every category list by ordinal.
    #[must_use]
    pub fn finish(self) -> GlobalAggregate {
        let module_stats = self
            .modules
            .into_iter()
            .map(|(name, acc)| {
                let aggregate = ModuleAggregate {
                    name: name.clone(),
                    total_files: acc.total_files,
                    issues_by_change: sort_by_ordinal(acc.issues),
                    complexity: ComplexityScorer::buckets(acc.scores),
                };
                (name, aggregate)
            })
            .collect();

        GlobalAggregate {
            total_files: self.seen.len(),
            issues_by_change: sort_by_ordinal(self.issues),
            module_stats,
        }
    }
}

fn label_for(catalog: &PatternCatalog, ordinal: u32) -> String {
    catalog.get(ordinal).map_or_else(
        || format!("{ordinal}. Unknown ({ordinal})"),
        crate::catalog::BreakingChange::label,
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
