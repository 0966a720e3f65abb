//! Complexity scoring for files and modules.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::PatternCatalog;

/// Weight used for a category that has no entry in the weight table.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Highest score still bucketed as [`ComplexityLevel::Low`].
pub const LOW_MAX: u32 = 2;

/// Highest score still bucketed as [`ComplexityLevel::Medium`].
pub const MEDIUM_MAX: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score <= LOW_MAX {
            Self::Low
        } else if score <= MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of a module's issue-bearing files per complexity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplexityBuckets {
    pub low_pct: u32,
    pub medium_pct: u32,
    pub high_pct: u32,
    pub has_high: bool,
}

/// Maps triggered categories to a weighted score.
#[derive(Debug, Clone, Default)]
pub struct ComplexityScorer {
    weights: HashMap<u32, u32>,
}

impl ComplexityScorer {
    #[must_use]
    pub const fn new(weights: HashMap<u32, u32>) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn from_catalog(catalog: &PatternCatalog) -> Self {
        Self::new(catalog.iter().map(|c| (c.ordinal(), c.weight())).collect())
    }

    #[must_use]
    pub fn weight(&self, ordinal: u32) -> u32 {
        self.weights.get(&ordinal).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Sum of weights of the triggered categories.
    pub fn score<I>(&self, ordinals: I) -> u32
    where
        I: IntoIterator<Item = u32>,
    {
        ordinals.into_iter().map(|o| self.weight(o)).sum()
    }

    /// Bucket percentages over the scores of a module's issue-bearing files.
    pub fn buckets<I>(scores: I) -> ComplexityBuckets
    where
        I: IntoIterator<Item = u32>,
    {
        let (low, medium, high) =
            scores
                .into_iter()
                .fold((0u32, 0u32, 0u32), |(l, m, h), score| {
                    match ComplexityLevel::from_score(score) {
                        ComplexityLevel::Low => (l + 1, m, h),
                        ComplexityLevel::Medium => (l, m + 1, h),
                        ComplexityLevel::High => (l, m, h + 1),
                    }
                });
        let total = low + medium + high;

        ComplexityBuckets {
            low_pct: percent(low, total),
            medium_pct: percent(medium, total),
            high_pct: percent(high, total),
            has_high: high > 0,
        }
    }
}

/// Integer percentage rounded half up; zero when `total` is zero.
const fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count * 200 + total) / (2 * total)
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
