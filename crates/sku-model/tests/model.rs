//! Tests for sku-model types.

use sku_model::{AxisId, GeneratorOptions, Product, TermFilter, VariationRecord};

#[test]
fn product_deserializes_with_defaults() {
    let product: Product = serde_json::from_str(
        r#"{
            "name": "Desk Panel",
            "base_sku": "panel",
            "axes": [
                {
                    "id": "pa_color",
                    "label": "Color",
                    "terms": [
                        {"name": "Red", "slug": "red", "suffix": "RD"},
                        {"name": "Blue", "slug": "blue"}
                    ]
                },
                {
                    "id": "pa_finish",
                    "label": "Finish",
                    "variation": false,
                    "terms": [{"name": "Matte", "slug": "matte", "suffix": "MT"}]
                }
            ],
            "variations": [
                {"id": "7", "sku": "PANEL-RED", "attributes": {"pa_color": "red"}}
            ]
        }"#,
    )
    .expect("deserialize product");

    assert_eq!(product.slug(), "desk-panel");
    assert_eq!(product.axes.len(), 2);
    assert!(product.axes[0].variation);
    assert!(!product.axes[1].variation);
    assert_eq!(product.axes[0].terms[1].suffix_token(), "");

    let color = AxisId::new("pa_color").unwrap();
    assert_eq!(product.axis(&color).map(|a| a.label.as_str()), Some("Color"));
    assert_eq!(product.variations[0].specificity(), 1);
}

#[test]
fn blank_axis_key_is_rejected() {
    let result: Result<VariationRecord, _> =
        serde_json::from_str(r#"{"sku": "X", "attributes": {"  ": "red"}}"#);
    assert!(result.is_err());
}

#[test]
fn suffixed_only_options() {
    let options = GeneratorOptions::suffixed_only();
    assert_eq!(options.term_filter, TermFilter::WithSuffix);
    assert!(options.validate().is_ok());
}
