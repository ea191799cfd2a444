//! Generated rows and non-fatal diagnostics.

use serde::{Deserialize, Serialize};

use crate::ids::AxisId;

/// Kind of non-fatal condition found while generating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// No axis was eligible for generation.
    EmptyAxisSet,
    /// A variation record constrains an axis outside the generated set.
    MalformedVariationRecord,
    /// The same axis id was defined more than once; the last one is used.
    DuplicateAxis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
}

/// One generated combination and its SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRow {
    /// Position of the combination in the Cartesian product.
    pub index: usize,
    /// Term display names, one per axis in axis order.
    pub terms: Vec<String>,
    pub sku: String,
    /// Specificity of the variation that supplied the base SKU, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<usize>,
}

impl SkuRow {
    /// Readable label such as `Color: Red | Size: Small`.
    pub fn label(&self, axis_labels: &[String]) -> String {
        axis_labels
            .iter()
            .zip(&self.terms)
            .map(|(label, term)| format!("{label}: {term}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn is_override(&self) -> bool {
        self.specificity.is_some()
    }
}

/// Every combination of a product with its SKU.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkuTable {
    pub product_name: String,
    pub axis_ids: Vec<AxisId>,
    pub axis_labels: Vec<String>,
    pub rows: Vec<SkuRow>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl SkuTable {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn override_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_override()).count()
    }

    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }

    pub fn push_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }
}
