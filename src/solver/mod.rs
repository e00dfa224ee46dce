pub mod constants;
mod core;
mod coverage;
mod errors;
mod range;
mod registry;

pub use self::core::{ExpressionSolver, SolveOutcome, SolveStats, SolverConfig};
pub use coverage::missing_targets;
pub use errors::SolverError;
pub use range::TargetRange;
pub use registry::{Solution, SolutionRegistry};
