//! Shared CSV utilities for product folders.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file read into normalized headers and trimmed cells.
#[derive(Debug, Clone)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvRows {
    /// Position of `name` among the headers, compared case-insensitively.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column(name).ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Cell value at `index`, empty when the row is short.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

/// Optional cell value (None if empty or missing).
pub fn optional_cell(row: &[String], index: Option<usize>) -> Option<&str> {
    index.map(|i| cell(row, i)).filter(|value| !value.is_empty())
}

fn normalize(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file with a header row.
///
/// Handles BOM characters, trims whitespace, and skips fully blank rows.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(CsvRows { headers, rows })
}
