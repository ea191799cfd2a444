//! Variation matching: pick the most specific explicit override for a
//! combination.

use sku_model::{AxisId, VariationRecord};

/// The record chosen for a combination and how many axes it pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub record: &'a VariationRecord,
    pub specificity: usize,
}

/// Specificity of `record` against one slug combination, or `None` when it
/// does not match.
///
/// Every constrained axis must exist in `axes` and carry the same slug at
/// that position. Wildcarded axes impose nothing. Records without a SKU
/// never match.
pub fn match_specificity<S: AsRef<str>>(
    record: &VariationRecord,
    axes: &[AxisId],
    slug_combination: &[S],
) -> Option<usize> {
    if !record.has_sku() {
        return None;
    }
    let mut specificity = 0;
    for (axis, slug) in record.constraints() {
        let position = axes.iter().position(|candidate| candidate == axis)?;
        let value = slug_combination.get(position)?;
        if value.as_ref() != slug {
            return None;
        }
        specificity += 1;
    }
    Some(specificity)
}

/// Best matching record for a slug combination.
///
/// The strictly most specific record wins. On a tie the record that appears
/// first in `records` is kept.
pub fn find_best_match<'a, S: AsRef<str>>(
    axes: &[AxisId],
    slug_combination: &[S],
    records: &'a [VariationRecord],
) -> Option<MatchResult<'a>> {
    let mut best: Option<MatchResult<'a>> = None;
    for record in records {
        let Some(specificity) = match_specificity(record, axes, slug_combination) else {
            continue;
        };
        if best.is_none_or(|current| specificity > current.specificity) {
            best = Some(MatchResult {
                record,
                specificity,
            });
        }
    }
    best
}
