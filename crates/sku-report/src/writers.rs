//! Streaming CSV and JSON writers.

use std::io::Write;

use serde::Serialize;

use sku_model::{Issue, SkuTable};

use crate::cells::{sanitize_cell, sanitize_sku, table_headers, table_records};
use crate::error::Result;

/// Writes the table as CSV with a header row.
pub fn write_csv<W: Write>(table: &SkuTable, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    csv.write_record(table_headers(table))?;
    for record in table_records(table) {
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonTable {
    product: String,
    headers: Vec<String>,
    rows: Vec<JsonRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<Issue>,
}

#[derive(Serialize)]
struct JsonRow {
    index: usize,
    combination: String,
    terms: Vec<String>,
    sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    specificity: Option<usize>,
}

/// Writes the table as a pretty-printed JSON document.
pub fn write_json<W: Write>(table: &SkuTable, mut writer: W) -> Result<()> {
    let document = JsonTable {
        product: sanitize_cell(&table.product_name),
        headers: table_headers(table),
        rows: table
            .rows
            .iter()
            .map(|row| JsonRow {
                index: row.index,
                combination: sanitize_cell(&row.label(&table.axis_labels)),
                terms: row.terms.iter().map(|term| sanitize_cell(term)).collect(),
                sku: sanitize_sku(&row.sku),
                specificity: row.specificity,
            })
            .collect(),
        issues: table.issues.clone(),
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(())
}
