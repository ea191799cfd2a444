//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sku_core::{AxisProjection, ProjectedAxis};
use sku_model::{Issue, IssueKind, Product, SkuTable};
use sku_report::{ExportSummary, sanitize_cell};

pub fn print_sku_table(table: &SkuTable) {
    println!("Product: {}", sanitize_cell(&table.product_name));
    if table.is_empty() {
        print_guidance(&table.issues);
        return;
    }
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("#"),
        header_cell("Attribute Combination"),
        header_cell("Generated SKU"),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 0, CellAlignment::Right);
    for row in &table.rows {
        let sku = if row.is_override() {
            Cell::new(&row.sku).fg(Color::Green)
        } else {
            Cell::new(&row.sku)
        };
        out.add_row(vec![
            dim_cell(row.index + 1),
            Cell::new(sanitize_cell(&row.label(&table.axis_labels))),
            sku,
        ]);
    }
    println!("{out}");
    println!(
        "{} combinations, {} from variation SKUs",
        table.len(),
        table.override_count()
    );
    print_issues(&table.issues);
}

/// Guidance printed when nothing could be generated.
pub fn print_guidance(issues: &[Issue]) {
    let messages: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::EmptyAxisSet)
        .map(|issue| issue.message.as_str())
        .collect();
    if messages.is_empty() {
        println!("No combinations to generate.");
    }
    for message in messages {
        println!("{message}");
    }
}

pub fn print_issues(issues: &[Issue]) {
    let reported: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.kind != IssueKind::EmptyAxisSet)
        .collect();
    if reported.is_empty() {
        return;
    }
    let mut out = Table::new();
    out.set_header(vec![header_cell("Source"), header_cell("Issue")]);
    apply_table_style(&mut out);
    for issue in reported {
        let source = match (&issue.record, &issue.axis) {
            (Some(record), _) => record.clone(),
            (None, Some(axis)) => axis.to_string(),
            (None, None) => "-".to_string(),
        };
        out.add_row(vec![
            Cell::new(source).fg(Color::Yellow),
            Cell::new(&issue.message),
        ]);
    }
    println!("{out}");
}

pub fn print_axes(product: &Product, projection: &AxisProjection) {
    println!("Product: {}", sanitize_cell(&product.name));
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Axis"),
        header_cell("Label"),
        header_cell("Terms"),
        header_cell("Eligible"),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 2, CellAlignment::Right);
    align_column(&mut out, 3, CellAlignment::Right);
    for axis in &product.axes {
        let eligible = projection.get(&axis.id).map_or(0, ProjectedAxis::len);
        let eligible_cell = if eligible == 0 {
            dim_cell(eligible)
        } else {
            Cell::new(eligible).fg(Color::Green)
        };
        let id_cell = if axis.variation {
            Cell::new(axis.id.as_str())
        } else {
            dim_cell(format!("{} (not for variations)", axis.id))
        };
        out.add_row(vec![
            id_cell,
            Cell::new(sanitize_cell(&axis.label)),
            Cell::new(axis.terms.len()),
            eligible_cell,
        ]);
    }
    println!("{out}");
    match projection.combination_count() {
        Some(count) if !projection.is_empty() => println!("Combinations: {count}"),
        Some(_) => println!("Combinations: 0"),
        None => println!("Combinations: more than {}", usize::MAX),
    }
}

pub fn print_export(summary: &ExportSummary) {
    println!("Wrote {} rows to {}", summary.rows, summary.path.display());
    println!("SHA-256: {}", summary.sha256);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
