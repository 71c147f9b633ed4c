//! Deterministic product grading.
//!
//! The engine turns [`ProductAttributes`] into an [`AssessmentResult`] using injected tier
//! lists. Grading is a pure function of its input and the configured tiers.

pub mod domain;
mod explain;
mod rules;
mod tiers;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentResult, Dimension, DimensionAssessment, DimensionScore, Grade, ProductAttributes,
    ScoreComponent,
};
pub use tiers::{BrandTiers, MaterialTiers, TierConfig};

use explain::{dimension_explanation, overall_explanation};
use rules::score_attributes;

/// Stateless grader that applies the tier configuration to product attributes.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    tiers: TierConfig,
}

impl GradingEngine {
    pub fn new(tiers: TierConfig) -> Self {
        Self {
            tiers: tiers.normalized(),
        }
    }

    pub fn tiers(&self) -> &TierConfig {
        &self.tiers
    }

    pub fn grade(&self, attributes: &ProductAttributes) -> AssessmentResult {
        let (sheet, components) = score_attributes(attributes, &self.tiers);

        AssessmentResult {
            brand: attributes.brand.clone(),
            materials: attributes.materials.clone(),
            quality: assess(Dimension::Quality, sheet.quality),
            construction: assess(Dimension::Construction, sheet.construction),
            durability: assess(Dimension::Durability, sheet.durability),
            ethics: assess(Dimension::Ethics, sheet.ethics),
            overall: {
                let grade = Grade::from_score(sheet.overall);
                DimensionAssessment {
                    score: sheet.overall,
                    grade,
                    explanation: overall_explanation(grade),
                }
            },
            components,
        }
    }
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self::new(TierConfig::standard())
    }
}

fn assess(dimension: Dimension, score: DimensionScore) -> DimensionAssessment {
    let grade = Grade::from_score(score);
    DimensionAssessment {
        score,
        grade,
        explanation: dimension_explanation(dimension, grade),
    }
}
