//! Parsing and validation of operand lists supplied on the command line

mod errors;
mod numbers;
mod validation;

pub use errors::UtilsError;
pub use numbers::parse_number_list;
pub use validation::validate_operands;
