//! Catalog types: adoptable cats and shop products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawsome_core::{CatId, ProductId};

/// An adoptable cat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    #[serde(rename = "_id")]
    pub id: CatId,
    pub name: String,
    pub breed: String,
    /// Age in years.
    pub age: u8,
    pub gender: String,
    pub description: String,
    /// Image file name served by the backend under `/uploads/`.
    #[serde(default)]
    pub image: Option<String>,
    /// One-time adoption fee; older records may not carry one.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub adoption_fee: Option<Decimal>,
    #[serde(default)]
    pub is_adopted: bool,
    pub traits: CatTraits,
}

/// Temperament traits used for browsing filters and compatibility scoring.
///
/// The trait vocabulary is owned by the backend, so values stay as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatTraits {
    pub energy_level: String,
    pub maintenance_level: String,
    pub personality: String,
    pub good_with_kids: bool,
}

/// A shop product (food, toys, accessories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    /// Units the backend reports as available; the cart treats this as an
    /// informational ceiling enforced by the UI layer.
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_parses_backend_shape() {
        let json = r#"{
            "_id": "c1",
            "name": "Miso",
            "breed": "Maine Coon",
            "age": 3,
            "gender": "female",
            "description": "Gentle giant.",
            "image": "miso.jpg",
            "adoptionFee": 120.5,
            "isAdopted": false,
            "traits": {
                "energyLevel": "low",
                "maintenanceLevel": "high",
                "personality": "calm",
                "goodWithKids": true
            }
        }"#;

        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, CatId::new("c1"));
        assert_eq!(cat.adoption_fee, Some(Decimal::new(1205, 1)));
        assert!(cat.traits.good_with_kids);
    }

    #[test]
    fn test_cat_without_fee_or_image() {
        let json = r#"{
            "_id": "c2",
            "name": "Pixel",
            "breed": "Bombay",
            "age": 1,
            "gender": "male",
            "description": "Tiny shadow.",
            "traits": {
                "energyLevel": "high",
                "maintenanceLevel": "low",
                "personality": "playful",
                "goodWithKids": false
            }
        }"#;

        let cat: Cat = serde_json::from_str(json).unwrap();
        assert_eq!(cat.adoption_fee, None);
        assert_eq!(cat.image, None);
        assert!(!cat.is_adopted);
    }

    #[test]
    fn test_product_parses_numeric_price() {
        let json = r#"{
            "_id": "p1",
            "name": "Feather Wand",
            "description": "Irresistible.",
            "price": 12.9,
            "category": "toys",
            "stock": 25,
            "isActive": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::new(129, 1));
        assert_eq!(product.stock, 25);
        assert!(product.is_active);
    }
}
