use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{
    decode_grade, validate_category, validate_overall_score, CategoryScale, ConstructionCategory,
    DurabilityCategory, EthicsCategory, QualityCategory, RawValue,
};
use crate::grading::{AssessmentResult, Dimension, DimensionScore, Grade};

/// Identifier wrapper for stored reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub Uuid);

impl ReportId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim()).map(ReportId)
    }
}

/// Report shape written to storage, with grades encoded into each dimension's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedReport {
    pub id: ReportId,
    pub url: String,
    pub brand: String,
    pub materials: String,
    pub quality: QualityCategory,
    pub construction: ConstructionCategory,
    pub durability: DurabilityCategory,
    pub ethics: EthicsCategory,
    pub overall_score: u8,
    pub quality_explanation: String,
    pub construction_explanation: String,
    pub durability_explanation: String,
    pub ethics_explanation: String,
    pub overall_explanation: String,
    pub created_at: DateTime<Utc>,
}

impl PersistedReport {
    pub fn from_assessment(
        id: ReportId,
        url: &str,
        assessment: &AssessmentResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url: url.to_string(),
            brand: assessment.brand.clone(),
            materials: assessment.materials.clone(),
            quality: QualityCategory::encode(assessment.quality.grade),
            construction: ConstructionCategory::encode(assessment.construction.grade),
            durability: DurabilityCategory::encode(assessment.durability.grade),
            ethics: EthicsCategory::encode(assessment.ethics.grade),
            overall_score: assessment.overall.score.value(),
            quality_explanation: assessment.quality.explanation.clone(),
            construction_explanation: assessment.construction.explanation.clone(),
            durability_explanation: assessment.durability.explanation.clone(),
            ethics_explanation: assessment.ethics.explanation.clone(),
            overall_explanation: assessment.overall.explanation.clone(),
            created_at,
        }
    }

    /// Row as a store hands it back: categorical and numeric fields lose their types.
    pub fn into_stored(self) -> StoredReport {
        StoredReport {
            id: self.id,
            url: self.url,
            brand: self.brand,
            materials: self.materials,
            quality: RawValue::from(self.quality.to_string()),
            construction: RawValue::from(self.construction.to_string()),
            durability: RawValue::from(self.durability.to_string()),
            ethics: RawValue::from(self.ethics.to_string()),
            overall_score: RawValue::from(self.overall_score),
            quality_explanation: self.quality_explanation,
            construction_explanation: self.construction_explanation,
            durability_explanation: self.durability_explanation,
            ethics_explanation: self.ethics_explanation,
            overall_explanation: self.overall_explanation,
            created_at: self.created_at,
        }
    }
}

/// Untrusted stored row. Category and score fields may hold anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: ReportId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub quality: RawValue,
    #[serde(default)]
    pub construction: RawValue,
    #[serde(default)]
    pub durability: RawValue,
    #[serde(default)]
    pub ethics: RawValue,
    #[serde(default)]
    pub overall_score: RawValue,
    #[serde(default)]
    pub quality_explanation: String,
    #[serde(default)]
    pub construction_explanation: String,
    #[serde(default)]
    pub durability_explanation: String,
    #[serde(default)]
    pub ethics_explanation: String,
    #[serde(default)]
    pub overall_explanation: String,
    pub created_at: DateTime<Utc>,
}

impl StoredReport {
    pub fn category(&self, dimension: Dimension) -> &RawValue {
        match dimension {
            Dimension::Quality => &self.quality,
            Dimension::Construction => &self.construction,
            Dimension::Durability => &self.durability,
            Dimension::Ethics => &self.ethics,
        }
    }

    pub fn explanation(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Quality => &self.quality_explanation,
            Dimension::Construction => &self.construction_explanation,
            Dimension::Durability => &self.durability_explanation,
            Dimension::Ethics => &self.ethics_explanation,
        }
    }
}

/// Display-ready dimension entry decoded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionView {
    pub dimension: Dimension,
    pub category: &'static str,
    pub grade: Grade,
    pub explanation: String,
}

/// Sanitized report served to the report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub id: ReportId,
    pub url: String,
    pub brand: String,
    pub materials: String,
    pub dimensions: Vec<DimensionView>,
    pub overall_score: u8,
    pub overall_grade: Grade,
    pub overall_explanation: String,
    pub created_at: DateTime<Utc>,
}

impl ReportView {
    pub fn from_stored(stored: &StoredReport) -> Self {
        let dimensions = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let category = validate_category(dimension, stored.category(dimension));
                DimensionView {
                    dimension,
                    category: category.label(),
                    grade: decode_grade(dimension, category),
                    explanation: stored.explanation(dimension).to_string(),
                }
            })
            .collect();

        let overall_score = validate_overall_score(&stored.overall_score);

        Self {
            id: stored.id,
            url: stored.url.clone(),
            brand: stored.brand.clone(),
            materials: stored.materials.clone(),
            dimensions,
            overall_score,
            overall_grade: Grade::from_score(DimensionScore::clamped(i32::from(overall_score))),
            overall_explanation: stored.overall_explanation.clone(),
            created_at: stored.created_at,
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionView> {
        self.dimensions
            .iter()
            .find(|view| view.dimension == dimension)
    }
}
