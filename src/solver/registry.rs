use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::solver::range::TargetRange;

/// A reachable target and the first expression found for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub value: i64,
    pub expression: String,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Write-once map from reached value to its solution, limited to a target
/// range. The first insert for a value wins; later ones are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRegistry {
    range: TargetRange,
    entries: BTreeMap<i64, Solution>,
}

impl SolutionRegistry {
    pub fn new(range: TargetRange) -> Self {
        Self {
            range,
            entries: BTreeMap::new(),
        }
    }

    pub fn range(&self) -> &TargetRange {
        &self.range
    }

    /// Whether an insert for `value` would be recorded
    #[inline]
    pub fn accepts(&self, value: i64) -> bool {
        self.range.contains(value) && !self.entries.contains_key(&value)
    }

    /// Record `expression` for `value` if it is in range and not yet known.
    /// Returns true when the entry was written.
    pub fn try_insert(&mut self, value: i64, expression: String) -> bool {
        if !self.accepts(value) {
            return false;
        }
        self.entries.insert(value, Solution { value, expression });
        true
    }

    pub fn get(&self, value: i64) -> Option<&Solution> {
        self.entries.get(&value)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.entries.contains_key(&value)
    }

    /// Recorded values in ascending order
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold `other` into this registry with first-writer-wins semantics.
    /// Returns the number of new entries.
    pub fn merge(&mut self, other: SolutionRegistry) -> usize {
        let mut added = 0;
        for (value, solution) in other.entries {
            if self.try_insert(value, solution.expression) {
                added += 1;
            }
        }
        added
    }
}
