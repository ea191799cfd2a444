//! Configuration options for SKU generation.

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::ids::AxisId;

/// Default ceiling on the number of combinations materialized per product.
pub const DEFAULT_MAX_COMBINATIONS: usize = 100_000;

/// Axis carrying the laminate colour token.
pub const LAMINATE_COLOR_AXIS: &str = "pa_laminate-color";

/// Axis carrying the laminate side-B token.
pub const LAMINATE_SIDE_B_AXIS: &str = "pa_laminate-side-b";

/// Which terms of an axis take part in generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFilter {
    /// Every term; a missing suffix contributes an empty token.
    #[default]
    All,
    /// Only terms with a non-empty suffix. Axes left without terms are
    /// dropped.
    WithSuffix,
}

/// Two axes whose adjacent suffix tokens are joined by `joiner` instead of
/// a hyphen.
///
/// The rule is symmetric in axis order: whichever of the two axes comes first
/// in the product's axis ordering provides the left-hand token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    pub first: AxisId,
    pub second: AxisId,
    #[serde(default = "default_joiner")]
    pub joiner: String,
}

fn default_joiner() -> String {
    ".".to_string()
}

impl MergeRule {
    pub fn new(first: AxisId, second: AxisId, joiner: impl Into<String>) -> Self {
        Self {
            first,
            second,
            joiner: joiner.into(),
        }
    }

    /// Double-sided laminates read as `COLOR.SIDE`.
    pub fn laminate() -> Self {
        Self {
            first: AxisId(LAMINATE_COLOR_AXIS.to_string()),
            second: AxisId(LAMINATE_SIDE_B_AXIS.to_string()),
            joiner: default_joiner(),
        }
    }

    /// True when the rule covers the unordered pair `(a, b)`.
    pub fn joins(&self, a: &AxisId, b: &AxisId) -> bool {
        (self.first.same_axis(a) && self.second.same_axis(b))
            || (self.first.same_axis(b) && self.second.same_axis(a))
    }
}

/// Options controlling SKU generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Products whose combination count exceeds this are rejected before
    /// any combination is materialized.
    pub max_combinations: usize,

    /// Term eligibility.
    pub term_filter: TermFilter,

    /// Token merge rules applied to the suffix part of every SKU.
    pub merge_rules: Vec<MergeRule>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            term_filter: TermFilter::All,
            merge_rules: vec![MergeRule::laminate()],
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listing mode: only terms that carry a suffix.
    pub fn suffixed_only() -> Self {
        Self {
            term_filter: TermFilter::WithSuffix,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = limit;
        self
    }

    #[must_use]
    pub fn with_term_filter(mut self, filter: TermFilter) -> Self {
        self.term_filter = filter;
        self
    }

    #[must_use]
    pub fn with_merge_rules(mut self, rules: Vec<MergeRule>) -> Self {
        self.merge_rules = rules;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_combinations == 0 {
            return Err(ModelError::ZeroCombinationLimit);
        }
        for rule in &self.merge_rules {
            if rule.first.same_axis(&rule.second) {
                return Err(ModelError::SelfMergeRule(rule.first.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminate_rule_matches_either_order_and_spelling() {
        let rule = MergeRule::laminate();
        let color = AxisId::new("laminate_color").unwrap();
        let side = AxisId::new("pa_laminate-side-b").unwrap();
        assert!(rule.joins(&color, &side));
        assert!(rule.joins(&side, &color));
        assert!(!rule.joins(&color, &AxisId::new("pa_size").unwrap()));
    }

    #[test]
    fn defaults_carry_laminate_rule() {
        let options = GeneratorOptions::default();
        assert_eq!(options.max_combinations, DEFAULT_MAX_COMBINATIONS);
        assert_eq!(options.term_filter, TermFilter::All);
        assert_eq!(options.merge_rules, vec![MergeRule::laminate()]);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_options() {
        let zero = GeneratorOptions::default().with_max_combinations(0);
        assert_eq!(zero.validate(), Err(ModelError::ZeroCombinationLimit));

        let axis = AxisId::new("pa_color").unwrap();
        let selfish = GeneratorOptions::default().with_merge_rules(vec![MergeRule::new(
            axis.clone(),
            axis,
            "/",
        )]);
        assert!(matches!(
            selfish.validate(),
            Err(ModelError::SelfMergeRule(_))
        ));
    }

    #[test]
    fn options_parse_from_toml() {
        let options: GeneratorOptions = toml::from_str(
            r#"
max_combinations = 500
term_filter = "with_suffix"

[[merge_rules]]
first = "pa_thickness"
second = "pa_finish"
joiner = "/"
"#,
        )
        .unwrap();
        assert_eq!(options.max_combinations, 500);
        assert_eq!(options.term_filter, TermFilter::WithSuffix);
        assert_eq!(options.merge_rules.len(), 1);
        assert_eq!(options.merge_rules[0].joiner, "/");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: GeneratorOptions = toml::from_str("max_combinations = 10").unwrap();
        assert_eq!(options.term_filter, TermFilter::All);
        assert_eq!(options.merge_rules, vec![MergeRule::laminate()]);
    }
}
