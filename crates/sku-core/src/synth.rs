//! SKU synthesis: suffix suppression, token merging, and final formatting.

use sku_model::{AxisId, MergeRule, VariationRecord};

/// Separator between suffix tokens and between the base and its suffixes.
pub const TOKEN_SEPARATOR: &str = "-";

/// Suffix tokens that survive suppression, paired with their axis, in axis
/// order. Empty tokens are dropped.
pub fn surviving_tokens<'a, S: AsRef<str>>(
    axes: &'a [AxisId],
    suffix_combination: &'a [S],
    matched: Option<&VariationRecord>,
) -> Vec<(&'a AxisId, &'a str)> {
    axes.iter()
        .zip(suffix_combination)
        .filter(|(axis, _)| !matched.is_some_and(|record| record.constrains(axis)))
        .map(|(axis, token)| (axis, token.as_ref()))
        .filter(|(_, token)| !token.is_empty())
        .collect()
}

/// Joins surviving tokens with hyphens, except between two adjacent tokens
/// whose axes are covered by a merge rule, which use the rule's joiner.
pub fn join_tokens(tokens: &[(&AxisId, &str)], rules: &[MergeRule]) -> String {
    let mut part = String::new();
    let mut previous: Option<&AxisId> = None;
    for (axis, token) in tokens {
        if let Some(prev) = previous {
            let joiner = rules
                .iter()
                .find(|rule| rule.joins(prev, axis))
                .map_or(TOKEN_SEPARATOR, |rule| rule.joiner.as_str());
            part.push_str(joiner);
        }
        part.push_str(token);
        previous = Some(axis);
    }
    part
}

/// Final SKU for one combination.
///
/// `base` is the matched record's SKU, or `base_sku` without a match. Axes
/// pinned by the matched record lose their suffix token. The result is
/// upper-cased after the merge rules are applied.
pub fn synthesize_sku<S: AsRef<str>>(
    axes: &[AxisId],
    suffix_combination: &[S],
    matched: Option<&VariationRecord>,
    base_sku: &str,
    rules: &[MergeRule],
) -> String {
    let base = matched.map_or(base_sku, |record| record.sku.as_str());
    let tokens = surviving_tokens(axes, suffix_combination, matched);
    let sku_part = join_tokens(&tokens, rules);
    if sku_part.is_empty() {
        base.to_ascii_uppercase()
    } else {
        format!("{base}{TOKEN_SEPARATOR}{sku_part}").to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<AxisId> {
        names.iter().map(|n| AxisId::new(*n).unwrap()).collect()
    }

    #[test]
    fn no_match_keeps_every_token() {
        let axes = ids(&["pa_color", "pa_size"]);
        let sku = synthesize_sku(&axes, &["rd", "sm"], None, "item", &[]);
        assert_eq!(sku, "ITEM-RD-SM");
    }

    #[test]
    fn matched_axes_are_suppressed() {
        let axes = ids(&["pa_color", "pa_size"]);
        let record = VariationRecord::new("item-red-special")
            .with_attribute(axes[0].clone(), "red");
        let sku = synthesize_sku(&axes, &["RD", "SM"], Some(&record), "ITEM", &[]);
        assert_eq!(sku, "ITEM-RED-SPECIAL-SM");
    }

    #[test]
    fn wildcard_attribute_does_not_suppress() {
        let axes = ids(&["pa_color", "pa_size"]);
        let record = VariationRecord::new("OVR")
            .with_attribute(axes[0].clone(), "")
            .with_attribute(axes[1].clone(), "small");
        let sku = synthesize_sku(&axes, &["RD", "SM"], Some(&record), "ITEM", &[]);
        assert_eq!(sku, "OVR-RD");
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let axes = ids(&["pa_color", "pa_size", "pa_finish"]);
        let sku = synthesize_sku(&axes, &["RD", "", "MT"], None, "ITEM", &[]);
        assert_eq!(sku, "ITEM-RD-MT");
    }

    #[test]
    fn all_suppressed_yields_bare_base() {
        let axes = ids(&["pa_color"]);
        let record = VariationRecord::new("red-one").with_attribute(axes[0].clone(), "red");
        let sku = synthesize_sku(&axes, &["RD"], Some(&record), "ITEM", &[]);
        assert_eq!(sku, "RED-ONE");
    }

    #[test]
    fn laminate_tokens_merge_in_axis_order() {
        let rules = vec![MergeRule::laminate()];

        let axes = ids(&["pa_laminate-color", "pa_laminate-side-b"]);
        let sku = synthesize_sku(&axes, &["WHT", "OAK"], None, "PANEL", &rules);
        assert_eq!(sku, "PANEL-WHT.OAK");

        let swapped = ids(&["pa_laminate-side-b", "pa_laminate-color"]);
        let sku = synthesize_sku(&swapped, &["OAK", "WHT"], None, "PANEL", &rules);
        assert_eq!(sku, "PANEL-OAK.WHT");
    }

    #[test]
    fn laminate_merge_needs_adjacent_surviving_tokens() {
        let rules = vec![MergeRule::laminate()];
        let axes = ids(&["pa_laminate-color", "pa_thickness", "pa_laminate-side-b"]);

        let separated = synthesize_sku(&axes, &["WHT", "18", "OAK"], None, "PANEL", &rules);
        assert_eq!(separated, "PANEL-WHT-18-OAK");

        let adjacent = synthesize_sku(&axes, &["WHT", "", "OAK"], None, "PANEL", &rules);
        assert_eq!(adjacent, "PANEL-WHT.OAK");
    }

    #[test]
    fn laminate_merge_skipped_when_one_side_suppressed() {
        let rules = vec![MergeRule::laminate()];
        let axes = ids(&["pa_laminate-color", "pa_laminate-side-b", "pa_size"]);
        let record = VariationRecord::new("PANEL-WHITE").with_attribute(axes[0].clone(), "white");
        let sku = synthesize_sku(&axes, &["WHT", "OAK", "LG"], Some(&record), "PANEL", &rules);
        assert_eq!(sku, "PANEL-WHITE-OAK-LG");
    }

    #[test]
    fn join_uses_configured_joiner() {
        let axes = ids(&["pa_thickness", "pa_finish"]);
        let rules = vec![MergeRule::new(axes[1].clone(), axes[0].clone(), "/")];
        let tokens: Vec<(&AxisId, &str)> = vec![(&axes[0], "18"), (&axes[1], "MT")];
        assert_eq!(join_tokens(&tokens, &rules), "18/MT");
    }
}
