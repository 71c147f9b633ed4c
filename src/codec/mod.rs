//! Mapping between letter grades and the per-dimension categories stored with reports.
//!
//! Every stored category ladder has four rungs while grades have five, so the mapping is
//! lossy at the bottom:
//!
//! | Grade | Quality   | Construction | Durability | Ethics     |
//! |-------|-----------|--------------|------------|------------|
//! | A     | Excellent | Premium      | 5+ Years   | Positive   |
//! | B     | Good      | Quality      | 3-4 Years  | Good       |
//! | C     | Average   | Standard     | 2-3 Years  | Neutral    |
//! | D     | Fair      | Basic        | 1-2 Years  | Concerning |
//! | F     | Fair      | Basic        | 1-2 Years  | Concerning |
//!
//! Decoding the bottom rung always yields `D`; an `F` does not survive persistence.

mod validate;

pub use validate::{parse_category, validate_category, validate_overall_score, RawValue};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grading::{Dimension, Grade};

/// Four-rung category ladder owned by one dimension.
pub trait CategoryScale: Copy + Eq + 'static {
    const DIMENSION: Dimension;
    /// Rungs ordered from best to worst.
    const LADDER: [Self; 4];

    fn label(self) -> &'static str;

    /// Fallback rung for unrecognized input.
    fn neutral() -> Self {
        Self::LADDER[2]
    }

    fn from_label(raw: &str) -> Option<Self> {
        Self::LADDER
            .into_iter()
            .find(|category| category.label() == raw)
    }

    fn encode(grade: Grade) -> Self {
        match grade {
            Grade::A => Self::LADDER[0],
            Grade::B => Self::LADDER[1],
            Grade::C => Self::LADDER[2],
            Grade::D | Grade::F => Self::LADDER[3],
        }
    }

    fn decode(self) -> Grade {
        match Self::LADDER.iter().position(|rung| *rung == self) {
            Some(0) => Grade::A,
            Some(1) => Grade::B,
            Some(3) => Grade::D,
            _ => Grade::C,
        }
    }
}

macro_rules! category_scale {
    (
        $(#[$meta:meta])*
        $name:ident, $dimension:expr, [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl CategoryScale for $name {
            const DIMENSION: Dimension = $dimension;
            const LADDER: [Self; 4] = [$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category_scale!(
    /// Stored vocabulary for the quality dimension.
    QualityCategory,
    Dimension::Quality,
    [Excellent => "Excellent", Good => "Good", Average => "Average", Fair => "Fair"]
);

category_scale!(
    /// Stored vocabulary for the construction dimension.
    ConstructionCategory,
    Dimension::Construction,
    [Premium => "Premium", Quality => "Quality", Standard => "Standard", Basic => "Basic"]
);

category_scale!(
    /// Stored vocabulary for the durability dimension, expressed as expected lifespan.
    DurabilityCategory,
    Dimension::Durability,
    [
        FivePlusYears => "5+ Years",
        ThreeToFourYears => "3-4 Years",
        TwoToThreeYears => "2-3 Years",
        OneToTwoYears => "1-2 Years",
    ]
);

category_scale!(
    /// Stored vocabulary for the ethics dimension.
    EthicsCategory,
    Dimension::Ethics,
    [Positive => "Positive", Good => "Good", Neutral => "Neutral", Concerning => "Concerning"]
);

/// A stored category tagged with the dimension whose ladder it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "category", rename_all = "snake_case")]
pub enum ExternalCategory {
    Quality(QualityCategory),
    Construction(ConstructionCategory),
    Durability(DurabilityCategory),
    Ethics(EthicsCategory),
}

impl ExternalCategory {
    pub fn dimension(self) -> Dimension {
        match self {
            ExternalCategory::Quality(_) => Dimension::Quality,
            ExternalCategory::Construction(_) => Dimension::Construction,
            ExternalCategory::Durability(_) => Dimension::Durability,
            ExternalCategory::Ethics(_) => Dimension::Ethics,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExternalCategory::Quality(category) => category.label(),
            ExternalCategory::Construction(category) => category.label(),
            ExternalCategory::Durability(category) => category.label(),
            ExternalCategory::Ethics(category) => category.label(),
        }
    }

    /// The dimension's fallback category.
    pub fn neutral(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Quality => ExternalCategory::Quality(QualityCategory::neutral()),
            Dimension::Construction => {
                ExternalCategory::Construction(ConstructionCategory::neutral())
            }
            Dimension::Durability => ExternalCategory::Durability(DurabilityCategory::neutral()),
            Dimension::Ethics => ExternalCategory::Ethics(EthicsCategory::neutral()),
        }
    }

    /// Exact match against the dimension's ladder labels.
    pub fn from_label(dimension: Dimension, raw: &str) -> Option<Self> {
        match dimension {
            Dimension::Quality => QualityCategory::from_label(raw).map(ExternalCategory::Quality),
            Dimension::Construction => {
                ConstructionCategory::from_label(raw).map(ExternalCategory::Construction)
            }
            Dimension::Durability => {
                DurabilityCategory::from_label(raw).map(ExternalCategory::Durability)
            }
            Dimension::Ethics => EthicsCategory::from_label(raw).map(ExternalCategory::Ethics),
        }
    }

    fn decode(self) -> Grade {
        match self {
            ExternalCategory::Quality(category) => category.decode(),
            ExternalCategory::Construction(category) => category.decode(),
            ExternalCategory::Durability(category) => category.decode(),
            ExternalCategory::Ethics(category) => category.decode(),
        }
    }
}

impl fmt::Display for ExternalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn encode_grade(dimension: Dimension, grade: Grade) -> ExternalCategory {
    match dimension {
        Dimension::Quality => ExternalCategory::Quality(QualityCategory::encode(grade)),
        Dimension::Construction => {
            ExternalCategory::Construction(ConstructionCategory::encode(grade))
        }
        Dimension::Durability => ExternalCategory::Durability(DurabilityCategory::encode(grade)),
        Dimension::Ethics => ExternalCategory::Ethics(EthicsCategory::encode(grade)),
    }
}

/// Encodes a raw grade label; anything other than `A`-`F` lands on the neutral rung.
pub fn encode_grade_label(dimension: Dimension, raw: &str) -> ExternalCategory {
    match Grade::parse(raw) {
        Some(grade) => encode_grade(dimension, grade),
        None => ExternalCategory::neutral(dimension),
    }
}

/// A category from another dimension's ladder is unrecognized and decodes to `C`.
pub fn decode_grade(dimension: Dimension, category: ExternalCategory) -> Grade {
    if category.dimension() == dimension {
        category.decode()
    } else {
        Grade::C
    }
}

/// Decodes a raw stored label; missing or unknown labels decode to `C`.
pub fn decode_grade_label(dimension: Dimension, raw: Option<&str>) -> Grade {
    raw.and_then(|label| ExternalCategory::from_label(dimension, label))
        .map(|category| decode_grade(dimension, category))
        .unwrap_or(Grade::C)
}

/// Full grade-to-category table for a dimension, including the collapsed bottom rung.
pub fn encoding_table(dimension: Dimension) -> [(Grade, ExternalCategory); 5] {
    Grade::ALL.map(|grade| (grade, encode_grade(dimension, grade)))
}
