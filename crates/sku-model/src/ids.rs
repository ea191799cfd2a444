#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Storage prefix carried by variation attribute keys (`attribute_pa_color`).
pub const ATTRIBUTE_KEY_PREFIX: &str = "attribute_";

/// Prefix used by global attribute taxonomies (`pa_color`).
pub const TAXONOMY_PREFIX: &str = "pa_";

/// Stable identifier of an attribute axis, e.g. `pa_color`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AxisId(pub(crate) String);

impl AxisId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAxisId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Builds an id from a variation attribute key, dropping the
    /// `attribute_` storage prefix when present.
    pub fn from_attribute_key(key: &str) -> Result<Self, ModelError> {
        let trimmed = key.trim();
        Self::new(trimmed.strip_prefix(ATTRIBUTE_KEY_PREFIX).unwrap_or(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Spelling-insensitive form used when comparing against configured
    /// axis names: lower-case, no `pa_` prefix, underscores read as hyphens.
    ///
    /// `pa_laminate-color`, `laminate_color` and `Laminate-Color` all
    /// canonicalize to `laminate-color`.
    pub fn canonical(&self) -> String {
        let lower = self.0.to_ascii_lowercase();
        let bare = lower.strip_prefix(TAXONOMY_PREFIX).unwrap_or(&lower);
        bare.replace('_', "-")
    }

    /// Compares two ids by their canonical form.
    pub fn same_axis(&self, other: &AxisId) -> bool {
        self == other || self.canonical() == other.canonical()
    }

    /// Human-readable label derived from the id (`pa_laminate-side-b` becomes
    /// `Laminate Side B`).
    pub fn default_label(&self) -> String {
        self.canonical()
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AxisId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AxisId> for String {
    fn from(value: AxisId) -> Self {
        value.0
    }
}

/// Normalizes free text into a term slug.
///
/// ASCII alphanumerics are lower-cased and kept; every other run of
/// characters collapses into a single `-`. Leading and trailing hyphens are
/// dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_id_rejects_blank() {
        assert!(AxisId::new("   ").is_err());
        assert_eq!(AxisId::new(" pa_color ").unwrap().as_str(), "pa_color");
    }

    #[test]
    fn attribute_prefix_is_stripped() {
        let id = AxisId::from_attribute_key("attribute_pa_color").unwrap();
        assert_eq!(id.as_str(), "pa_color");
        let bare = AxisId::from_attribute_key("pa_size").unwrap();
        assert_eq!(bare.as_str(), "pa_size");
    }

    #[test]
    fn canonical_ignores_prefix_and_separator() {
        let stored = AxisId::new("pa_laminate-color").unwrap();
        let plain = AxisId::new("laminate_color").unwrap();
        assert_eq!(stored.canonical(), "laminate-color");
        assert!(stored.same_axis(&plain));
        assert!(!stored.same_axis(&AxisId::new("pa_laminate-side-b").unwrap()));
    }

    #[test]
    fn default_label_title_cases_words() {
        let id = AxisId::new("pa_laminate-side-b").unwrap();
        assert_eq!(id.default_label(), "Laminate Side B");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Dark Oak / Matte"), "dark-oak-matte");
        assert_eq!(slugify("  Red  "), "red");
        assert_eq!(slugify("12mm"), "12mm");
        assert_eq!(slugify("---"), "");
    }
}
