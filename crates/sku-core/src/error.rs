use thiserror::Error;

use sku_model::ModelError;

/// Errors that stop table generation.
///
/// Empty axis sets and malformed variation records are not errors; they are
/// reported as issues on the generated table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{} combinations exceed the configured limit of {limit}", describe_count(.count))]
    CombinatorialOverflow { count: Option<usize>, limit: usize },
    #[error("invalid generator options: {0}")]
    InvalidOptions(#[from] ModelError),
}

fn describe_count(count: &Option<usize>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => "more than usize::MAX".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
