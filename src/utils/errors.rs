use thiserror::Error;

/// Errors in user-supplied operand lists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Number list cannot be empty")]
    EmptyNumberList,
    #[error("Not an integer: '{0}'")]
    InvalidNumber(String),
    #[error("Operands must be positive, got {0}")]
    NonPositiveNumber(i64),
}
