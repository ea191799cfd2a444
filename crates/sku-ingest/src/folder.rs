//! Product folders made of CSV files.
//!
//! | File             | Columns                                              |
//! |------------------|------------------------------------------------------|
//! | `product.csv`    | `name`, `sku` (first data row is used)               |
//! | `axes.csv`       | `axis`, `label`, `variation`, `name`, `slug`, `suffix` |
//! | `variations.csv` | `id`, `sku`, then one column per axis id             |
//!
//! `axes.csv` holds one row per term; axes keep the order in which they first
//! appear. `label`, `variation`, `slug`, and `suffix` are optional. Axis
//! columns in `variations.csv` may carry the `attribute_` prefix; an empty
//! cell is a wildcard. `variations.csv` itself is optional.

use std::path::Path;

use tracing::debug;

use sku_model::{Axis, AxisId, Product, VariationRecord};

use crate::csv_rows::{cell, optional_cell, read_csv_rows};
use crate::error::{IngestError, Result};
use crate::json::build_term;

pub const PRODUCT_FILE: &str = "product.csv";
pub const AXES_FILE: &str = "axes.csv";
pub const VARIATIONS_FILE: &str = "variations.csv";

/// True when `dir` looks like a product folder.
pub fn is_product_folder(dir: &Path) -> bool {
    dir.is_dir() && dir.join(PRODUCT_FILE).is_file()
}

/// Load a product from a folder of CSV files.
pub fn load_product_folder(dir: &Path) -> Result<Product> {
    let mut product = read_product_header(&dir.join(PRODUCT_FILE))?;
    product.axes = read_axes(&dir.join(AXES_FILE))?;
    let variations_path = dir.join(VARIATIONS_FILE);
    if variations_path.is_file() {
        product.variations = read_variations(&variations_path)?;
    }
    debug!(
        product = %product.name,
        axes = product.axes.len(),
        variations = product.variations.len(),
        "loaded product folder"
    );
    Ok(product)
}

fn read_product_header(path: &Path) -> Result<Product> {
    let table = read_csv_rows(path)?;
    let name_col = table.require_column("name", path)?;
    let sku_col = table.column("sku");
    let row = table
        .rows
        .first()
        .ok_or_else(|| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "no product row".to_string(),
        })?;
    Ok(Product::new(
        cell(row, name_col),
        optional_cell(row, sku_col).unwrap_or_default(),
    ))
}

/// Read `axes.csv` into axes, one row per term.
pub fn read_axes(path: &Path) -> Result<Vec<Axis>> {
    let table = read_csv_rows(path)?;
    let axis_col = table.require_column("axis", path)?;
    let name_col = table.require_column("name", path)?;
    let label_col = table.column("label");
    let variation_col = table.column("variation");
    let slug_col = table.column("slug");
    let suffix_col = table.column("suffix");

    let mut axes: Vec<Axis> = Vec::new();
    for row in &table.rows {
        let id = AxisId::new(cell(row, axis_col)).map_err(|e| IngestError::model(path, e))?;
        let position = match axes.iter().position(|axis| axis.id == id) {
            Some(position) => position,
            None => {
                axes.push(Axis::unlabeled(id));
                axes.len() - 1
            }
        };
        let axis = &mut axes[position];
        if let Some(label) = optional_cell(row, label_col) {
            axis.label = label.to_string();
        }
        if let Some(flag) = optional_cell(row, variation_col) {
            axis.variation = parse_flag(flag).ok_or_else(|| IngestError::InvalidValue {
                field: "variation".to_string(),
                value: flag.to_string(),
                path: path.to_path_buf(),
            })?;
        }
        let name = cell(row, name_col);
        if name.is_empty() {
            continue;
        }
        axis.terms.push(build_term(
            name,
            optional_cell(row, slug_col),
            optional_cell(row, suffix_col),
        ));
    }
    Ok(axes)
}

/// Read `variations.csv`; every column other than `id` and `sku` is an axis.
pub fn read_variations(path: &Path) -> Result<Vec<VariationRecord>> {
    let table = read_csv_rows(path)?;
    let sku_col = table.require_column("sku", path)?;
    let id_col = table.column("id");

    let mut axis_cols = Vec::new();
    for (index, header) in table.headers.iter().enumerate() {
        if index == sku_col || Some(index) == id_col || header.is_empty() {
            continue;
        }
        let axis = AxisId::from_attribute_key(header).map_err(|e| IngestError::model(path, e))?;
        axis_cols.push((index, axis));
    }

    let records = table
        .rows
        .iter()
        .map(|row| {
            let mut record = VariationRecord::new(cell(row, sku_col));
            record.id = optional_cell(row, id_col).map(str::to_string);
            for (index, axis) in &axis_cols {
                record
                    .attributes
                    .insert(axis.clone(), cell(row, *index).to_string());
            }
            record
        })
        .collect();
    Ok(records)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Some(true),
        "0" | "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn axes_keep_first_appearance_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            AXES_FILE,
            "axis,label,name,suffix\n\
             pa_size,Size,Small,SM\n\
             pa_color,Color,Red,RD\n\
             pa_size,,Large,LG\n",
        );
        let axes = read_axes(&dir.path().join(AXES_FILE)).unwrap();
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].id.as_str(), "pa_size");
        assert_eq!(axes[0].label, "Size");
        assert_eq!(axes[0].terms.len(), 2);
        assert_eq!(axes[0].terms[1].slug, "large");
        assert_eq!(axes[1].terms[0].suffix_token(), "RD");
    }

    #[test]
    fn invalid_variation_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), AXES_FILE, "axis,variation,name\npa_size,maybe,Small\n");
        let err = read_axes(&dir.path().join(AXES_FILE)).unwrap_err();
        assert!(matches!(err, IngestError::InvalidValue { .. }));
    }

    #[test]
    fn variation_columns_become_axes() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            VARIATIONS_FILE,
            "id,sku,attribute_pa_color,pa_size\n\
             1,ITEM-RED,red,\n\
             2,,blue,large\n",
        );
        let records = read_variations(&dir.path().join(VARIATIONS_FILE)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("1"));
        assert_eq!(records[0].specificity(), 1);
        assert!(!records[1].has_sku());
        assert!(records[1].constrains(&AxisId::new("pa_size").unwrap()));
    }

    #[test]
    fn folder_without_variations_loads() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PRODUCT_FILE, "name,sku\nShirt,ITEM\n");
        write(dir.path(), AXES_FILE, "axis,name,suffix\npa_color,Red,RD\n");
        assert!(is_product_folder(dir.path()));
        let product = load_product_folder(dir.path()).unwrap();
        assert_eq!(product.name, "Shirt");
        assert_eq!(product.base_sku, "ITEM");
        assert_eq!(product.axes[0].label, "Color");
        assert!(product.variations.is_empty());
    }
}
