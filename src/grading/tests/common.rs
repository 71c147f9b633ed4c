use crate::grading::{GradingEngine, ProductAttributes, TierConfig};

pub(super) fn attributes(brand: &str, price: f64, materials: &str) -> ProductAttributes {
    ProductAttributes {
        url: "https://shop.example.com/products/42".to_string(),
        brand: brand.to_string(),
        price: Some(price),
        materials: materials.to_string(),
        garment_type: "shirt".to_string(),
    }
}

/// Brand and materials that match no tier, priced between the thresholds.
pub(super) fn neutral_attributes() -> ProductAttributes {
    attributes("Corner Tailor", 120.0, "hemp")
}

pub(super) fn engine() -> GradingEngine {
    GradingEngine::new(TierConfig::standard())
}
