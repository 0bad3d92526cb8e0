//! Catalog value shapes: products, offers, items and images.
//!
//! All shapes are plain values with structural equality; nesting is by value
//! (an offer owns its items, an item owns its images).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, Validator};

/// Fraction of the price added as tax when a product is accepted.
pub const TAX_RATE: f64 = 0.05;

/// A product submitted for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name.
    pub name: String,
    /// Price; must be at least 100.
    pub price: f64,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tax figure; accepted in [0, 5000] but recomputed before storage.
    pub tax: f64,
}

impl Product {
    /// Validates the declared constraints.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint: `price >= 100`, `tax` in
    /// `[0, 5000]` (both inclusive).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.check_min("price", self.price, 100.0);
        v.check_range("tax", self.tax, 0.0, 5000.0);
        v.finish()
    }

    /// Returns the product with its tax recomputed as price plus 5% of
    /// price, discarding whatever the client supplied.
    #[must_use]
    pub fn with_recomputed_tax(mut self) -> Self {
        self.tax = self.price + self.price * TAX_RATE;
        self
    }
}

/// An image attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image location; must be a well-formed http(s) URL.
    pub url: String,
    /// Display name.
    pub name: String,
}

/// A line item inside an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item price.
    pub price: f64,
    /// Optional tax figure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    /// Unique tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Optional attached images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

impl Item {
    /// Validates the item, prefixing violations with `prefix` so nested
    /// failures name their position inside the offer.
    fn validate_into(&self, prefix: &str, v: &mut Validator) {
        if let Some(images) = &self.images {
            for (idx, image) in images.iter().enumerate() {
                v.check_url(&format!("{prefix}.images[{idx}].url"), &image.url);
            }
        }
    }
}

/// A bundle of items offered at a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Offer price.
    pub price: f64,
    /// Items included in the offer.
    pub items: Vec<Item>,
}

impl Offer {
    /// Validates the offer and every nested item.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint across the nested structure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        for (idx, item) in self.items.iter().enumerate() {
            item.validate_into(&format!("items[{idx}]"), &mut v);
        }
        v.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, tax: f64) -> Product {
        Product {
            name: "Widget".to_string(),
            price,
            description: None,
            tax,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(product(100.0, 0.0).validate().is_ok());
        assert!(product(250.0, 5000.0).validate().is_ok());
    }

    #[test]
    fn test_price_below_minimum_rejected() {
        let err = product(99.99, 0.0).validate().unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "price");
    }

    #[test]
    fn test_tax_out_of_range_rejected() {
        let err = product(200.0, 5000.01).validate().unwrap_err();
        assert_eq!(err.violations[0].field, "tax");
    }

    #[test]
    fn test_tax_recomputed_from_price() {
        let stored = product(200.0, 4999.0).with_recomputed_tax();
        assert!((stored.tax - 210.0).abs() < f64::EPSILON);
        // Client-supplied tax is discarded entirely.
        let stored = product(100.0, 0.0).with_recomputed_tax();
        assert!((stored.tax - 105.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offer_rejects_bad_image_url() {
        let offer = Offer {
            name: "Bundle".to_string(),
            description: None,
            price: 500.0,
            items: vec![Item {
                name: "Widget".to_string(),
                description: None,
                price: 100.0,
                tax: None,
                tags: BTreeSet::new(),
                images: Some(vec![Image {
                    url: "not-a-url".to_string(),
                    name: "photo".to_string(),
                }]),
            }],
        };

        let err = offer.validate().unwrap_err();
        assert_eq!(err.violations[0].field, "items[0].images[0].url");
    }

    #[test]
    fn test_offer_round_trips_through_json() {
        let json = r#"{
            "name": "Bundle",
            "price": 500.0,
            "items": [
                {
                    "name": "Widget",
                    "price": 100.0,
                    "tags": ["new", "sale", "new"],
                    "images": [{"url": "https://example.com/w.png", "name": "front"}]
                }
            ]
        }"#;

        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.items.len(), 1);
        // Duplicate tags collapse to a set.
        assert_eq!(offer.items[0].tags.len(), 2);
        assert!(offer.validate().is_ok());
    }
}
