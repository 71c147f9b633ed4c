use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing attributes produced by an extractor and consumed by the grading engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub url: String,
    pub brand: String,
    /// Price in the platform's base currency unit. Absent prices never move a score.
    #[serde(default)]
    pub price: Option<f64>,
    /// Comma separated material names, e.g. `"60% organic cotton, 40% linen"`.
    #[serde(default)]
    pub materials: String,
    #[serde(default, alias = "garmentType")]
    pub garment_type: String,
}

impl ProductAttributes {
    /// Lowercased, trimmed material tokens with blanks removed.
    pub fn material_tokens(&self) -> Vec<String> {
        self.materials
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }
}

/// Independently scored facet of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Quality,
    Construction,
    Durability,
    Ethics,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Quality,
        Dimension::Construction,
        Dimension::Durability,
        Dimension::Ethics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Quality => "Quality",
            Dimension::Construction => "Construction",
            Dimension::Durability => "Durability",
            Dimension::Ethics => "Ethics",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score in `[0, 100]`. Construction always clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionScore(u8);

impl DimensionScore {
    pub const MAX: DimensionScore = DimensionScore(100);

    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DimensionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter grade ordered `A > B > C > D > F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Thresholds are inclusive lower bounds checked from the top down.
    pub fn from_score(score: DimensionScore) -> Self {
        match score.value() {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Accepts a single grade letter in either case, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" | "a" => Some(Grade::A),
            "B" | "b" => Some(Grade::B),
            "C" | "c" => Some(Grade::C),
            "D" | "d" => Some(Grade::D),
            "F" | "f" => Some(Grade::F),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::F => 0,
        }
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score, grade and explanation for one dimension (or the overall result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionAssessment {
    pub score: DimensionScore,
    pub grade: Grade,
    pub explanation: String,
}

/// Single adjustment applied on top of the base score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: Dimension,
    pub delta: i16,
    pub note: String,
}

/// Output of one grading call. A new assessment is always a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub brand: String,
    pub materials: String,
    pub quality: DimensionAssessment,
    pub construction: DimensionAssessment,
    pub durability: DimensionAssessment,
    pub ethics: DimensionAssessment,
    pub overall: DimensionAssessment,
    pub components: Vec<ScoreComponent>,
}

impl AssessmentResult {
    pub fn dimension(&self, dimension: Dimension) -> &DimensionAssessment {
        match dimension {
            Dimension::Quality => &self.quality,
            Dimension::Construction => &self.construction,
            Dimension::Durability => &self.durability,
            Dimension::Ethics => &self.ethics,
        }
    }

    pub fn components_for(&self, dimension: Dimension) -> impl Iterator<Item = &ScoreComponent> {
        self.components
            .iter()
            .filter(move |component| component.dimension == dimension)
    }
}
