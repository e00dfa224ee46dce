use thiserror::Error;

use crate::bag::BagError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid target range: lower bound {lower} is above upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
    #[error("Draw error: {0}")]
    BagError(#[from] BagError),
}
