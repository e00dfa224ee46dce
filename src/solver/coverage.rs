use crate::solver::range::TargetRange;
use crate::solver::registry::SolutionRegistry;

/// Targets in `range` with no registry entry, ascending
pub fn missing_targets(range: &TargetRange, registry: &SolutionRegistry) -> Vec<i64> {
    range.iter().filter(|&value| !registry.contains(value)).collect()
}
