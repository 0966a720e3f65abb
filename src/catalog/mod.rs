//! Catalog of Vue 2 → Vue 3 breaking-change categories.
//!
//! Each category owns an ordinal (its stable identity and report position),
//! a human-readable name, a complexity weight, and the detection rules that
//! trigger it. Identity is never derived from display strings.

mod builtin;

pub use builtin::BUILTIN_CATEGORIES;

use regex::Regex;

use crate::error::{Result, Vue3ScanError};

/// Static definition of a category, compiled into a [`BreakingChange`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub ordinal: u32,
    pub name: &'static str,
    pub weight: u32,
    pub rules: &'static [&'static str],
}

/// A breaking-change category with compiled detection rules.
#[derive(Debug, Clone)]
pub struct BreakingChange {
    ordinal: u32,
    name: String,
    weight: u32,
    rules: Vec<Regex>,
}

impl BreakingChange {
    /// Compile a category from its rule sources.
    ///
    /// # Errors
    /// Returns an error if any rule is not a valid regular expression.
    pub fn new(ordinal: u32, name: &str, weight: u32, rules: &[&str]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Vue3ScanError::InvalidRule {
                    pattern: (*pattern).to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ordinal,
            name: name.to_string(),
            weight,
            rules,
        })
    }

    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Report label in the `"<ordinal>. <Name> (<ordinal>)"` convention.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}. {} ({})", self.ordinal, self.name, self.ordinal)
    }

    /// True if any rule matches the content. Stops at the first match.
    #[must_use]
    pub fn is_triggered_by(&self, content: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(content))
    }
}

/// Ordered, immutable set of breaking-change categories.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    categories: Vec<BreakingChange>,
}

impl PatternCatalog {
    /// Build a catalog from category definitions.
    ///
    /// Categories are kept in ascending ordinal order regardless of input order.
    ///
    /// # Errors
    /// Returns an error if a rule fails to compile or an ordinal is repeated.
    pub fn new(defs: &[CategoryDef]) -> Result<Self> {
        let mut categories = defs
            .iter()
            .map(|def| BreakingChange::new(def.ordinal, def.name, def.weight, def.rules))
            .collect::<Result<Vec<_>>>()?;
        categories.sort_by_key(BreakingChange::ordinal);

        if let Some(pair) = categories
            .windows(2)
            .find(|pair| pair[0].ordinal == pair[1].ordinal)
        {
            return Err(Vue3ScanError::Config(format!(
                "Duplicate category ordinal {}",
                pair[0].ordinal
            )));
        }

        Ok(Self { categories })
    }

    /// The built-in Vue 2 → Vue 3 catalog.
    ///
    /// # Errors
    /// Returns an error only if a built-in rule fails to compile.
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_CATEGORIES)
    }

    #[must_use]
    pub fn get(&self, ordinal: u32) -> Option<&BreakingChange> {
        self.categories
            .binary_search_by_key(&ordinal, BreakingChange::ordinal)
            .ok()
            .map(|idx| &self.categories[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakingChange> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
