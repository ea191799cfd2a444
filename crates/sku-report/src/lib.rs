//! SKU table reporting.
//!
//! - **CSV**: header row plus one record per combination
//! - **JSON**: rows with readable combination labels and any issues
//! - **Export**: CSV file on disk with its SHA-256 digest

#![deny(unsafe_code)]

mod cells;
mod error;
mod export;
mod hash;
mod writers;

pub use cells::{PRODUCT_NAME_HEADER, SKU_HEADER, sanitize_cell, sanitize_sku, table_headers};
pub use error::{ReportError, Result};
pub use export::{ExportSummary, export_csv, export_file_name};
pub use hash::sha256_hex;
pub use writers::{write_csv, write_json};
