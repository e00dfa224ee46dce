//! Lukle - an exhaustive countdown-numbers solver
//!
//! Given a bag of integers, this library tries every subset, ordering,
//! operator assignment and parenthesization using `+ - * /` with exact
//! integer division, and records one expression for every reachable target
//! in a range together with the targets that cannot be reached.

pub mod bag;
pub mod config;
pub mod enumerate;
pub mod expression;
pub mod solver;
pub mod utils;

use rand::Rng;

// Re-export the main public API
pub use bag::{Bag, BagError, Pool};
pub use config::{ConfigError, GameConfig};
pub use expression::{Expression, ExpressionError, Operator, Token};
pub use solver::{
    ExpressionSolver, Solution, SolutionRegistry, SolveOutcome, SolveStats, SolverConfig,
    SolverError, TargetRange,
};
pub use utils::{UtilsError, parse_number_list, validate_operands};

/// Draw a bag from the standard pools using the thread-local RNG
///
/// # Errors
///
/// Returns an error if `big_count` exceeds 4 or `small_count` exceeds 20.
///
/// # Examples
///
/// ```
/// let bag = lukle::draw(2, 4).expect("standard pools hold 4 big and 20 small numbers");
/// assert_eq!(bag.len(), 6);
/// ```
pub fn draw(big_count: usize, small_count: usize) -> Result<Bag, BagError> {
    draw_with_rng(big_count, small_count, &mut rand::rng())
}

/// Draw a bag from the standard pools with a caller-supplied RNG, which makes
/// the draw reproducible when the RNG is seeded
///
/// # Errors
///
/// Returns an error if either count exceeds its pool.
pub fn draw_with_rng<R: Rng + ?Sized>(
    big_count: usize,
    small_count: usize,
    rng: &mut R,
) -> Result<Bag, BagError> {
    Pool::standard().draw(big_count, small_count, rng)
}

/// Enumerate every expression over `bag` and report which targets in
/// `range` are reachable.
///
/// Returns the registry of first-found solutions and the ascending list of
/// targets with no solution.
///
/// # Examples
///
/// ```
/// use lukle::{Bag, TargetRange, solve};
///
/// let range = TargetRange::new(1, 10).expect("lower <= upper");
/// let (registry, missing) = solve(&Bag::new(vec![2, 3]), range);
/// assert_eq!(registry.get(6).map(|s| s.to_string()), Some("(2 * 3) = 6".to_string()));
/// assert!(missing.contains(&4));
/// ```
pub fn solve(bag: &Bag, range: TargetRange) -> (SolutionRegistry, Vec<i64>) {
    let config = SolverConfig {
        range,
        ..SolverConfig::default()
    };
    ExpressionSolver::new(config).solve(bag).into_parts()
}

/// Draw a bag and solve it in one step
///
/// # Errors
///
/// Returns [`SolverError::BagError`] if the draw counts exceed the pools.
pub fn draw_and_solve<R: Rng + ?Sized>(
    big_count: usize,
    small_count: usize,
    config: SolverConfig,
    rng: &mut R,
) -> Result<(Bag, SolveOutcome), SolverError> {
    let bag = draw_with_rng(big_count, small_count, rng)?;
    let outcome = ExpressionSolver::new(config).solve(&bag);
    Ok((bag, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draw_rejects_oversized_request() {
        assert_eq!(
            draw(5, 4),
            Err(BagError::TooManyBig {
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn test_draw_and_solve_seeded() {
        let config = SolverConfig {
            max_operands: Some(3),
            ..SolverConfig::default()
        };
        let first = draw_and_solve(1, 3, config.clone(), &mut StdRng::seed_from_u64(9));
        let second = draw_and_solve(1, 3, config, &mut StdRng::seed_from_u64(9));
        assert!(first.is_ok());
        if let (Ok((bag_a, outcome_a)), Ok((bag_b, outcome_b))) = (first, second) {
            assert_eq!(bag_a, bag_b);
            assert_eq!(outcome_a.registry, outcome_b.registry);
        }
    }

    #[test]
    fn test_draw_and_solve_propagates_bag_error() {
        let result = draw_and_solve(0, 21, SolverConfig::default(), &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(SolverError::BagError(_))));
    }
}
