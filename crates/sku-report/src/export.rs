//! Export of a table to a CSV file on disk.

use std::path::{Path, PathBuf};

use tracing::info;

use sku_model::{SkuTable, slugify};

use crate::cells::sanitize_cell;
use crate::error::{ReportError, Result};
use crate::hash::sha256_hex;
use crate::writers::write_csv;

const EXPORT_PREFIX: &str = "sku-combinations";

/// What [`export_csv`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub sha256: String,
}

/// File name used for a product's export, e.g. `sku-combinations-desk-panel.csv`.
pub fn export_file_name(product_name: &str) -> String {
    let slug = slugify(&sanitize_cell(product_name));
    if slug.is_empty() {
        format!("{EXPORT_PREFIX}.csv")
    } else {
        format!("{EXPORT_PREFIX}-{slug}.csv")
    }
}

/// Writes the table to `dir` as CSV, creating the directory when needed.
pub fn export_csv(table: &SkuTable, dir: &Path) -> Result<ExportSummary> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(export_file_name(&table.product_name));

    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    std::fs::write(&path, &buffer).map_err(|source| ReportError::FileWrite {
        path: path.clone(),
        source,
    })?;

    let summary = ExportSummary {
        rows: table.len(),
        sha256: sha256_hex(&buffer),
        path,
    };
    info!(
        path = %summary.path.display(),
        rows = summary.rows,
        sha256 = %summary.sha256,
        "exported sku table"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_product_slug() {
        assert_eq!(export_file_name("Desk Panel"), "sku-combinations-desk-panel.csv");
        assert_eq!(export_file_name("<b>Lamp</b>"), "sku-combinations-lamp.csv");
        assert_eq!(export_file_name("***"), "sku-combinations.csv");
    }
}
