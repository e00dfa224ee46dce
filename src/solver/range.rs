use std::fmt;
use std::ops::RangeInclusive;

use log::warn;
use serde::Serialize;

use crate::solver::constants::{DEFAULT_LOWER_TARGET, DEFAULT_UPPER_TARGET};
use crate::solver::errors::SolverError;

/// Inclusive bounds on the results that are recorded and reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetRange {
    lower: i64,
    upper: i64,
}

impl TargetRange {
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidRange`] if `lower > upper`.
    pub fn new(lower: i64, upper: i64) -> Result<Self, SolverError> {
        if lower > upper {
            warn!("Rejecting target range {}..={}", lower, upper);
            return Err(SolverError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.lower..=self.upper
    }

    /// Number of targets in the range
    pub fn size(&self) -> u64 {
        self.upper.abs_diff(self.lower).saturating_add(1)
    }
}

impl Default for TargetRange {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_TARGET,
            upper: DEFAULT_UPPER_TARGET,
        }
    }
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..={}", self.lower, self.upper)
    }
}
