use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Token stream is empty")]
    EmptyStream,
    #[error("Operator at position {position} needs two operands")]
    StackUnderflow { position: usize },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{dividend} is not exactly divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Integer overflow")]
    Overflow,
    #[error("Stream left {depth} values on the stack")]
    UnbalancedStack { depth: usize },
    #[error("Cannot parse expression: {0}")]
    Parse(String),
}
