//! Boundary for turning a product listing URL into [`ProductAttributes`].

use async_trait::async_trait;
use thiserror::Error;

use crate::grading::ProductAttributes;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to fetch listing {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("unable to read product details from {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// Source of product attributes. Implementations either return a complete record or an
/// error, never a partially filled one.
#[async_trait]
pub trait AttributeExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ProductAttributes, ExtractionError>;
}

/// Stand-in extractor that returns the same attributes for every listing.
#[derive(Debug, Clone)]
pub struct PlaceholderExtractor {
    template: ProductAttributes,
}

impl PlaceholderExtractor {
    pub fn new(template: ProductAttributes) -> Self {
        Self { template }
    }
}

impl Default for PlaceholderExtractor {
    fn default() -> Self {
        Self::new(ProductAttributes {
            url: String::new(),
            brand: "Sample Brand".to_string(),
            price: Some(100.0),
            materials: "cotton, polyester".to_string(),
            garment_type: "shirt".to_string(),
        })
    }
}

#[async_trait]
impl AttributeExtractor for PlaceholderExtractor {
    async fn extract(&self, url: &str) -> Result<ProductAttributes, ExtractionError> {
        Ok(ProductAttributes {
            url: url.to_string(),
            ..self.template.clone()
        })
    }
}
