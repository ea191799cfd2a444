//! Product ingestion: build a [`sku_model::Product`] snapshot from files.

#![deny(unsafe_code)]

use std::path::Path;

use tracing::info;

pub mod csv_rows;
pub mod error;
pub mod folder;
pub mod json;

pub use csv_rows::{CsvRows, read_csv_rows};
pub use error::{IngestError, Result};
pub use folder::{is_product_folder, load_product_folder, read_axes, read_variations};
pub use json::{load_product_json, parse_product_json};

use sku_model::Product;

/// Load a product from a `.json` document or a product folder.
pub fn load_product(path: &Path) -> Result<Product> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let product = if path.is_file() && is_json {
        load_product_json(path)?
    } else if is_product_folder(path) {
        load_product_folder(path)?
    } else if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    } else {
        return Err(IngestError::UnsupportedSource {
            path: path.to_path_buf(),
        });
    };
    info!(
        product = %product.name,
        source = %path.display(),
        axes = product.axes.len(),
        variations = product.variations.len(),
        "product loaded"
    );
    Ok(product)
}
