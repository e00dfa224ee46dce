use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::bag::Bag;
use crate::enumerate::{
    IndexCombinations, OperatorSequences, Permutations, Shape, generate_shapes, streams_for_size,
};
use crate::expression::{Evaluator, Expression, Operator, Token, assemble_into};
use crate::solver::coverage::missing_targets;
use crate::solver::range::TargetRange;
use crate::solver::registry::SolutionRegistry;

/// Configuration for a solving session
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub range: TargetRange,
    /// Shard each subset size across rayon workers
    pub parallel: bool,
    /// Largest subset size to try; `None` uses the whole bag
    pub max_operands: Option<usize>,
    /// Stop starting new subsets once this much time has passed
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            range: TargetRange::default(),
            parallel: true,
            max_operands: None,
            timeout: None,
        }
    }
}

/// Counters collected while enumerating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStats {
    pub streams_evaluated: u64,
    pub valid_streams: u64,
    pub elapsed_ms: u64,
    /// False when the timeout cut the enumeration short
    pub exhausted: bool,
}

impl SolveStats {
    fn absorb(&mut self, other: &SolveStats) {
        self.streams_evaluated += other.streams_evaluated;
        self.valid_streams += other.valid_streams;
    }
}

/// Completed registry together with the targets it does not cover
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub registry: SolutionRegistry,
    pub missing: Vec<i64>,
    pub stats: SolveStats,
}

impl SolveOutcome {
    pub fn into_parts(self) -> (SolutionRegistry, Vec<i64>) {
        (self.registry, self.missing)
    }
}

/// Shapes and operator sequences shared by every subset of one size
struct SizePlan {
    shapes: Vec<Shape>,
    operator_sequences: Vec<Vec<Operator>>,
}

impl SizePlan {
    fn new(operands: usize) -> Self {
        Self {
            shapes: generate_shapes(operands),
            operator_sequences: OperatorSequences::new(operands.saturating_sub(1)).collect(),
        }
    }
}

/// Exhaustive search over every subset, ordering, operator assignment and
/// grouping of a bag.
///
/// Enumeration order is subset size ascending, then index combination
/// (lexicographic), permutation (lexicographic over positions), operator
/// sequence (last slot fastest) and shape. The first stream in that order to
/// reach a value owns its registry entry. In parallel mode each combination
/// fills a local registry and the locals are merged in combination order, so
/// both modes produce the same registry.
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, bag: &Bag) -> SolveOutcome {
        let start = Instant::now();
        let deadline = self.config.timeout.map(|timeout| start + timeout);
        let n = bag.len();
        let max_operands = self.config.max_operands.map_or(n, |cap| cap.min(n));

        info!(
            "Solving bag {} for targets {} ({} mode)",
            bag,
            self.config.range,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let mut registry = SolutionRegistry::new(self.config.range);
        let mut stats = SolveStats {
            exhausted: true,
            ..SolveStats::default()
        };

        for m in 1..=max_operands {
            debug!(
                "Subset size {}: {} token streams to evaluate",
                m,
                streams_for_size(n, m)
            );

            let plan = SizePlan::new(m);
            let completed = if self.config.parallel {
                self.search_size_parallel(bag, m, &plan, deadline, &mut registry, &mut stats)
            } else {
                self.search_size_sequential(bag, m, &plan, deadline, &mut registry, &mut stats)
            };

            debug!(
                "Subset size {} done: {} targets reached so far",
                m,
                registry.len()
            );

            if !completed {
                warn!("Timeout reached during subset size {}; results are partial", m);
                stats.exhausted = false;
                break;
            }
        }

        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        let missing = missing_targets(&self.config.range, &registry);

        info!(
            "Evaluated {} streams ({} valid) in {} ms: {} targets reached, {} missing",
            stats.streams_evaluated,
            stats.valid_streams,
            stats.elapsed_ms,
            registry.len(),
            missing.len()
        );

        SolveOutcome {
            registry,
            missing,
            stats,
        }
    }

    /// Returns false if the deadline passed before every ordering ran
    fn search_size_sequential(
        &self,
        bag: &Bag,
        m: usize,
        plan: &SizePlan,
        deadline: Option<Instant>,
        registry: &mut SolutionRegistry,
        stats: &mut SolveStats,
    ) -> bool {
        let mut evaluator = Evaluator::new();
        let mut tokens = Vec::with_capacity(2 * m);

        for combo in IndexCombinations::new(bag.len(), m) {
            for ordering in Permutations::new(subset_values(bag, &combo)) {
                if is_past(deadline) {
                    return false;
                }
                search_ordering(&ordering, plan, &mut evaluator, &mut tokens, registry, stats);
            }
        }
        true
    }

    /// Shards over (combination, permutation) pairs so the largest subset
    /// size, which has a single combination, still spreads across workers.
    /// Local registries are merged in enumeration order.
    ///
    /// Returns false if the deadline passed before every ordering ran
    fn search_size_parallel(
        &self,
        bag: &Bag,
        m: usize,
        plan: &SizePlan,
        deadline: Option<Instant>,
        registry: &mut SolutionRegistry,
        stats: &mut SolveStats,
    ) -> bool {
        let orderings: Vec<Vec<i64>> = IndexCombinations::new(bag.len(), m)
            .flat_map(|combo| Permutations::new(subset_values(bag, &combo)))
            .collect();

        let locals: Vec<Option<(SolutionRegistry, SolveStats)>> = orderings
            .par_iter()
            .map_init(
                || (Evaluator::new(), Vec::with_capacity(2 * m)),
                |(evaluator, tokens), ordering| {
                    if is_past(deadline) {
                        return None;
                    }
                    let mut local = SolutionRegistry::new(self.config.range);
                    let mut local_stats = SolveStats::default();
                    search_ordering(ordering, plan, evaluator, tokens, &mut local, &mut local_stats);
                    Some((local, local_stats))
                },
            )
            .collect();

        let mut completed = true;
        for local in locals {
            match local {
                Some((local_registry, local_stats)) => {
                    stats.absorb(&local_stats);
                    registry.merge(local_registry);
                }
                None => completed = false,
            }
        }
        completed
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn is_past(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

fn subset_values(bag: &Bag, combo: &[usize]) -> Vec<i64> {
    combo
        .iter()
        .filter_map(|&i| bag.values().get(i).copied())
        .collect()
}

/// Evaluate every stream built from one ordering of a subset and record
/// new targets
fn search_ordering(
    ordering: &[i64],
    plan: &SizePlan,
    evaluator: &mut Evaluator,
    tokens: &mut Vec<Token>,
    registry: &mut SolutionRegistry,
    stats: &mut SolveStats,
) {
    for operators in &plan.operator_sequences {
        for shape in &plan.shapes {
            assemble_into(shape, ordering, operators, tokens);
            stats.streams_evaluated += 1;

            let Ok(value) = evaluator.evaluate(tokens) else {
                continue;
            };
            stats.valid_streams += 1;

            if registry.accepts(value)
                && let Ok(expr) = Expression::from_tokens(tokens)
            {
                registry.try_insert(value, expr.to_string());
            }
        }
    }
}
