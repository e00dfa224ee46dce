use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    #[error("Requested {requested} big numbers but the pool only has {available}")]
    TooManyBig { requested: usize, available: usize },
    #[error("Requested {requested} small numbers but the pool only has {available}")]
    TooManySmall { requested: usize, available: usize },
}
