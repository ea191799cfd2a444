//! Product snapshot: attribute axes, their terms, and explicit variations.
//!
//! A [`Product`] is supplied once per request and is never mutated by the
//! generator. Axis order and term order are significant: they determine the
//! order of generated combinations and the position of each suffix token in
//! the synthesized SKU.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AxisId, slugify};

/// One admissible value of an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Display name shown in row labels.
    pub name: String,
    /// Normalized identifier compared against variation records.
    pub slug: String,
    /// SKU token contributed by this term. `None` contributes nothing.
    #[serde(default)]
    pub suffix: Option<String>,
}

impl Term {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            suffix: None,
        }
    }

    /// Term whose slug is derived from its display name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self::new(name, slug)
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.suffix = if suffix.is_empty() { None } else { Some(suffix) };
        self
    }

    /// Suffix token, empty when the term carries none.
    pub fn suffix_token(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix_token().is_empty()
    }
}

/// One attribute used to vary product SKUs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub id: AxisId,
    pub label: String,
    /// Attributes not used for variations never take part in generation.
    #[serde(default = "default_variation")]
    pub variation: bool,
    pub terms: Vec<Term>,
}

fn default_variation() -> bool {
    true
}

impl Axis {
    pub fn new(id: AxisId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            variation: true,
            terms: Vec::new(),
        }
    }

    /// Axis labelled from its id.
    pub fn unlabeled(id: AxisId) -> Self {
        let label = id.default_label();
        Self::new(id, label)
    }

    #[must_use]
    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }

    #[must_use]
    pub fn with_terms(mut self, terms: impl IntoIterator<Item = Term>) -> Self {
        self.terms.extend(terms);
        self
    }

    #[must_use]
    pub fn with_variation(mut self, variation: bool) -> Self {
        self.variation = variation;
        self
    }
}

/// An explicitly authored SKU override.
///
/// `attributes` is sparse: an axis that is absent, or mapped to an empty
/// slug, matches any value of that axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationRecord {
    /// Collaborator-side identifier, used only in diagnostics.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub attributes: BTreeMap<AxisId, String>,
}

impl VariationRecord {
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            id: None,
            sku: sku.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, axis: AxisId, slug: impl Into<String>) -> Self {
        self.attributes.insert(axis, slug.into());
        self
    }

    /// Only records carrying an explicit SKU take part in matching.
    pub fn has_sku(&self) -> bool {
        !self.sku.is_empty()
    }

    /// Non-wildcard `(axis, slug)` pairs.
    pub fn constraints(&self) -> impl Iterator<Item = (&AxisId, &str)> {
        self.attributes
            .iter()
            .filter(|(_, slug)| !slug.is_empty())
            .map(|(axis, slug)| (axis, slug.as_str()))
    }

    /// True when the record pins `axis` to a specific slug.
    pub fn constrains(&self, axis: &AxisId) -> bool {
        self.attributes
            .get(axis)
            .is_some_and(|slug| !slug.is_empty())
    }

    /// Number of axes the record explicitly constrains.
    pub fn specificity(&self) -> usize {
        self.constraints().count()
    }

    /// Identifier for log and issue messages.
    pub fn display_name(&self) -> String {
        match &self.id {
            Some(id) => format!("#{id} ({})", self.sku),
            None => self.sku.clone(),
        }
    }
}

/// Snapshot of a configurable product handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub base_sku: String,
    #[serde(default)]
    pub axes: Vec<Axis>,
    #[serde(default)]
    pub variations: Vec<VariationRecord>,
}

impl Product {
    pub fn new(name: impl Into<String>, base_sku: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_sku: base_sku.into(),
            axes: Vec::new(),
            variations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_variation(mut self, record: VariationRecord) -> Self {
        self.variations.push(record);
        self
    }

    pub fn axis(&self, id: &AxisId) -> Option<&Axis> {
        self.axes.iter().find(|axis| &axis.id == id)
    }

    /// Slug used in export file names.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}
