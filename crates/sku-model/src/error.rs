use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid axis id: {0:?}")]
    InvalidAxisId(String),
    #[error("max_combinations must be at least 1")]
    ZeroCombinationLimit,
    #[error("merge rule joins axis {0} with itself")]
    SelfMergeRule(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
