//! JSON product documents.
//!
//! The document mirrors how variable products are stored upstream: term
//! slugs may be omitted, and variation attribute keys may keep their
//! `attribute_` storage prefix.
//!
//! ```json
//! {
//!   "name": "Desk Panel",
//!   "sku": "PANEL",
//!   "attributes": [
//!     {"id": "pa_laminate-color", "label": "Laminate Color",
//!      "terms": [{"name": "White", "suffix": "WHT"}]}
//!   ],
//!   "variations": [
//!     {"id": 12, "sku": "PANEL-W", "attributes": {"attribute_pa_laminate-color": "white"}}
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use sku_model::{Axis, AxisId, Product, Term, VariationRecord, slugify};

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct ProductDocument {
    name: String,
    #[serde(default, alias = "base_sku")]
    sku: String,
    #[serde(default, alias = "axes")]
    attributes: Vec<AttributeDocument>,
    #[serde(default)]
    variations: Vec<VariationDocument>,
}

#[derive(Debug, Deserialize)]
struct AttributeDocument {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default = "default_variation")]
    variation: bool,
    #[serde(default)]
    terms: Vec<TermDocument>,
}

fn default_variation() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct TermDocument {
    name: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    suffix: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VariationDocument {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    attributes: BTreeMap<String, Option<String>>,
}

/// Load a product from a JSON document.
pub fn load_product_json(path: &Path) -> Result<Product> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_product_json(&bytes, path)
}

/// Parse a product document; `path` is used in error messages only.
pub fn parse_product_json(bytes: &[u8], path: &Path) -> Result<Product> {
    let document: ProductDocument =
        serde_json::from_slice(bytes).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut product = Product::new(document.name.trim(), document.sku.trim());
    for attribute in document.attributes {
        let id = AxisId::new(attribute.id).map_err(|e| IngestError::model(path, e))?;
        if product.axis(&id).is_some() {
            return Err(IngestError::DuplicateAxis {
                axis: id.to_string(),
                path: path.to_path_buf(),
            });
        }
        let mut axis = match attribute.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => Axis::new(id, label),
            _ => Axis::unlabeled(id),
        }
        .with_variation(attribute.variation);
        for term in attribute.terms {
            axis.terms.push(build_term(
                &term.name,
                term.slug.as_deref(),
                term.suffix.as_deref(),
            ));
        }
        product.axes.push(axis);
    }

    for variation in document.variations {
        let mut record = VariationRecord::new(variation.sku.unwrap_or_default().trim());
        record.id = variation.id.as_ref().and_then(id_text);
        for (key, slug) in variation.attributes {
            let axis = AxisId::from_attribute_key(&key).map_err(|e| IngestError::model(path, e))?;
            record
                .attributes
                .insert(axis, slug.unwrap_or_default().trim().to_string());
        }
        product.variations.push(record);
    }
    Ok(product)
}

/// Term with a derived slug when none was given.
pub(crate) fn build_term(name: &str, slug: Option<&str>, suffix: Option<&str>) -> Term {
    let name = name.trim();
    let slug = match slug.map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(name),
    };
    Term::new(name, slug).with_suffix(suffix.map(str::trim).unwrap_or_default())
}

fn id_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_keys_and_derives_slugs() {
        let json = br#"{
            "name": " Desk Panel ",
            "sku": "panel",
            "attributes": [
                {"id": "pa_laminate-color", "terms": [{"name": "Snow White", "suffix": "WHT"}]},
                {"id": "pa_size", "label": "Size", "variation": false, "terms": []}
            ],
            "variations": [
                {"id": 12, "sku": "PANEL-W", "attributes": {"attribute_pa_laminate-color": "snow-white", "attribute_pa_size": null}}
            ]
        }"#;
        let product = parse_product_json(json, Path::new("panel.json")).unwrap();

        assert_eq!(product.name, "Desk Panel");
        assert_eq!(product.base_sku, "panel");
        assert_eq!(product.axes[0].label, "Laminate Color");
        assert_eq!(product.axes[0].terms[0].slug, "snow-white");
        assert_eq!(product.axes[0].terms[0].suffix_token(), "WHT");
        assert!(!product.axes[1].variation);

        let record = &product.variations[0];
        assert_eq!(record.id.as_deref(), Some("12"));
        assert_eq!(record.specificity(), 1);
        let color = AxisId::new("pa_laminate-color").unwrap();
        assert_eq!(record.attributes.get(&color).map(String::as_str), Some("snow-white"));
        assert!(record.attributes.contains_key(&AxisId::new("pa_size").unwrap()));
    }

    #[test]
    fn accepts_model_field_names() {
        let json = br#"{"name": "X", "base_sku": "X", "axes": []}"#;
        let product = parse_product_json(json, Path::new("x.json")).unwrap();
        assert_eq!(product.base_sku, "X");
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let err = parse_product_json(b"{", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn repeated_attribute_id_is_rejected() {
        let json = br#"{"name": "X", "attributes": [
            {"id": "pa_color", "terms": [{"name": "Red"}]},
            {"id": "pa_color", "terms": [{"name": "Blue"}]}
        ]}"#;
        let err = parse_product_json(json, Path::new("x.json")).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateAxis { ref axis, .. } if axis == "pa_color"));
    }

    #[test]
    fn blank_attribute_id_is_rejected() {
        let json = br#"{"name": "X", "attributes": [{"id": " ", "terms": []}]}"#;
        let err = parse_product_json(json, Path::new("x.json")).unwrap_err();
        assert!(matches!(err, IngestError::Model { .. }));
    }
}
