//! Per-combination SKU resolution: matching followed by synthesis.

use tracing::trace;

use sku_model::{AxisId, MergeRule, VariationRecord};

use crate::matcher::find_best_match;
use crate::synth::synthesize_sku;

/// SKU of one combination together with the specificity of the override
/// that supplied its base, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub sku: String,
    pub specificity: Option<usize>,
}

/// Resolves the SKU for one combination using the default laminate merge
/// rule.
///
/// `slug_combination` and `suffix_combination` are the slug and suffix
/// projections of the same combination, indexed like `axes_in_order`.
pub fn resolve_sku<S: AsRef<str>, T: AsRef<str>>(
    combination_index: usize,
    axes_in_order: &[AxisId],
    slug_combination: &[S],
    suffix_combination: &[T],
    variation_records: &[VariationRecord],
    base_sku: &str,
) -> String {
    resolve_sku_with_rules(
        combination_index,
        axes_in_order,
        slug_combination,
        suffix_combination,
        variation_records,
        base_sku,
        &[MergeRule::laminate()],
    )
    .sku
}

/// Like [`resolve_sku`] with explicit merge rules.
pub fn resolve_sku_with_rules<S: AsRef<str>, T: AsRef<str>>(
    combination_index: usize,
    axes_in_order: &[AxisId],
    slug_combination: &[S],
    suffix_combination: &[T],
    variation_records: &[VariationRecord],
    base_sku: &str,
    rules: &[MergeRule],
) -> Resolution {
    let best = find_best_match(axes_in_order, slug_combination, variation_records);
    let sku = synthesize_sku(
        axes_in_order,
        suffix_combination,
        best.map(|m| m.record),
        base_sku,
        rules,
    );
    match best {
        Some(m) => trace!(
            index = combination_index,
            record = %m.record.display_name(),
            specificity = m.specificity,
            sku = %sku,
            "resolved with override"
        ),
        None => trace!(index = combination_index, sku = %sku, "resolved from base sku"),
    }
    Resolution {
        sku,
        specificity: best.map(|m| m.specificity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_example() {
        let axes = vec![
            AxisId::new("color").unwrap(),
            AxisId::new("size").unwrap(),
        ];
        let records =
            vec![VariationRecord::new("ITEM-RED-SPECIAL").with_attribute(axes[0].clone(), "red")];

        let red_small = resolve_sku(0, &axes, &["red", "small"], &["RD", "SM"], &records, "ITEM");
        assert_eq!(red_small, "ITEM-RED-SPECIAL-SM");

        let blue_small =
            resolve_sku(2, &axes, &["blue", "small"], &["BL", "SM"], &records, "ITEM");
        assert_eq!(blue_small, "ITEM-BL-SM");
    }

    #[test]
    fn resolution_reports_specificity() {
        let axes = vec![AxisId::new("color").unwrap()];
        let records = vec![VariationRecord::new("X").with_attribute(axes[0].clone(), "red")];
        let hit = resolve_sku_with_rules(0, &axes, &["red"], &["RD"], &records, "ITEM", &[]);
        assert_eq!(hit.specificity, Some(1));
        let miss = resolve_sku_with_rules(1, &axes, &["blue"], &["BL"], &records, "ITEM", &[]);
        assert_eq!(miss.specificity, None);
        assert_eq!(miss.sku, "ITEM-BL");
    }
}
