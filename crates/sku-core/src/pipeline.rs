//! End-to-end generation of a product's SKU table.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use sku_model::{
    AxisId, GeneratorOptions, Issue, IssueKind, Product, SkuRow, SkuTable, TermFilter,
    VariationRecord,
};

use crate::combinations::generate_combinations;
use crate::error::{CoreError, Result};
use crate::projection::{AxisProjection, duplicate_axis_ids};
use crate::resolve::resolve_sku_with_rules;

/// Generates every combination of `product` with its resolved SKU.
///
/// A product without eligible axes yields an empty table carrying an
/// [`IssueKind::EmptyAxisSet`] issue. Variation records that constrain
/// axes or terms outside the projection are reported as
/// [`IssueKind::MalformedVariationRecord`] and simply never match. An axis id
/// defined more than once is projected once, from its last definition, and
/// reported as [`IssueKind::DuplicateAxis`].
///
/// # Errors
///
/// Returns [`CoreError::CombinatorialOverflow`] when the combination count
/// exceeds `options.max_combinations`, and [`CoreError::InvalidOptions`] when
/// the options fail validation.
pub fn generate_table(product: &Product, options: &GeneratorOptions) -> Result<SkuTable> {
    options.validate()?;
    let span = info_span!("generate", product = %product.name);
    let _guard = span.enter();
    let start = Instant::now();

    let projection = AxisProjection::from_axes(&product.axes, options.term_filter);
    let mut table = SkuTable::new(product.name.clone());
    for axis in duplicate_axis_ids(&product.axes) {
        warn!(axis = %axis, "axis defined more than once, using the last definition");
        table.push_issue(Issue {
            kind: IssueKind::DuplicateAxis,
            message: format!("axis {axis} is defined more than once; the last definition is used"),
            axis: Some(axis),
            record: None,
        });
    }
    table.axis_ids = projection.ids();
    table.axis_labels = projection.labels();

    if projection.is_empty() {
        info!(
            axis_count = product.axes.len(),
            term_filter = ?options.term_filter,
            "no eligible axes, nothing to generate"
        );
        table.push_issue(Issue {
            kind: IssueKind::EmptyAxisSet,
            message: empty_axis_message(options),
            axis: None,
            record: None,
        });
        return Ok(table);
    }

    let count = projection.combination_count();
    let count = match count {
        Some(count) if count <= options.max_combinations => count,
        _ => {
            return Err(CoreError::CombinatorialOverflow {
                count,
                limit: options.max_combinations,
            });
        }
    };
    debug!(
        axes = projection.axes.len(),
        combinations = count,
        variations = product.variations.len(),
        "projected axes"
    );

    for issue in audit_variations(&projection, &product.variations) {
        warn!(
            record = issue.record.as_deref().unwrap_or("-"),
            axis = issue.axis.as_ref().map_or("-", AxisId::as_str),
            "{}",
            issue.message
        );
        table.push_issue(issue);
    }

    let names = generate_combinations(&projection.names());
    let slugs = generate_combinations(&projection.slugs());
    let suffixes = generate_combinations(&projection.suffixes());
    let axes = &table.axis_ids;

    let mut rows = Vec::with_capacity(count);
    for (index, ((terms, slug_combination), suffix_combination)) in
        names.into_iter().zip(&slugs).zip(&suffixes).enumerate()
    {
        let resolution = resolve_sku_with_rules(
            index,
            axes,
            slug_combination,
            suffix_combination,
            &product.variations,
            &product.base_sku,
            &options.merge_rules,
        );
        rows.push(SkuRow {
            index,
            terms,
            sku: resolution.sku,
            specificity: resolution.specificity,
        });
    }
    table.rows = rows;

    info!(
        rows = table.len(),
        overrides = table.override_count(),
        issues = table.issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok(table)
}

/// Flags records that can never match because they reference an axis or a
/// term slug that is not part of the projection. Records without a SKU are
/// ignored since they never take part in matching.
pub fn audit_variations(projection: &AxisProjection, records: &[VariationRecord]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for record in records.iter().filter(|record| record.has_sku()) {
        for (axis, slug) in record.constraints() {
            let message = match projection.get(axis) {
                None => format!(
                    "variation {} constrains axis {axis} which is not a generated axis",
                    record.display_name()
                ),
                Some(projected) if !projected.has_slug(slug) => format!(
                    "variation {} selects unknown or ineligible term {slug:?} on axis {axis}",
                    record.display_name()
                ),
                Some(_) => continue,
            };
            issues.push(Issue {
                kind: IssueKind::MalformedVariationRecord,
                message,
                axis: Some(axis.clone()),
                record: Some(record.display_name()),
            });
        }
    }
    issues
}

fn empty_axis_message(options: &GeneratorOptions) -> String {
    match options.term_filter {
        TermFilter::WithSuffix => "No attributes with suffixes are set for variations. \
             Add suffixes to the terms you want to include in SKU generation."
            .to_string(),
        TermFilter::All => {
            "This product has no attributes configured for variations.".to_string()
        }
    }
}
