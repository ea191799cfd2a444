//! Error types for product ingestion.

use std::path::PathBuf;

use thiserror::Error;

use sku_model::ModelError;

/// Errors that can occur while loading a product snapshot.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Path is neither a JSON file nor a product folder.
    #[error("unsupported product source {path}: expected a .json file or a folder with product.csv")]
    UnsupportedSource { path: PathBuf },

    /// File listed by the folder layout is missing.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in a CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("invalid {field} value '{value}' in {path}")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
    },

    /// The same attribute id appears twice in a product document.
    #[error("attribute '{axis}' is defined more than once in {path}")]
    DuplicateAxis { axis: String, path: PathBuf },

    #[error("invalid identifier in {path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn model(path: impl Into<PathBuf>, source: ModelError) -> Self {
        Self::Model {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
