use std::collections::HashMap;

use super::CategoryAggregate;

/// Order category aggregates ascending by ordinal.
#[must_use]
pub fn sort_by_ordinal(issues: HashMap<u32, CategoryAggregate>) -> Vec<CategoryAggregate> {
    let mut sorted: Vec<CategoryAggregate> = issues.into_values().collect();
    sorted.sort_unstable_by_key(|c| c.ordinal);
    sorted
}
