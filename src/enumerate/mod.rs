//! Enumerators for the four nested loops of the search: shapes,
//! index combinations, permutations and operator sequences

mod combinations;
mod counting;
mod operators;
mod permutations;
mod shapes;

pub use combinations::IndexCombinations;
pub use counting::{binomial, catalan, factorial, streams_for_size};
pub use operators::OperatorSequences;
pub use permutations::Permutations;
pub use shapes::{Marker, Shape, generate_shapes};
