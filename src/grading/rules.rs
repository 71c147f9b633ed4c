use super::domain::{Dimension, DimensionScore, ProductAttributes, ScoreComponent};
use super::tiers::TierConfig;

const BASE_SCORE: i32 = 75;
const HIGH_PRICE: f64 = 500.0;
const LOW_PRICE: f64 = 50.0;

/// First tier entry matched by the product, per tier.
struct MaterialSignals {
    premium: Option<String>,
    avoid: Option<String>,
}

struct BrandSignals {
    high: Option<String>,
    medium: Option<String>,
    low: Option<String>,
}

pub(crate) struct ScoreSheet {
    pub quality: DimensionScore,
    pub construction: DimensionScore,
    pub durability: DimensionScore,
    pub ethics: DimensionScore,
    pub overall: DimensionScore,
}

struct Tally<'a> {
    dimension: Dimension,
    total: i32,
    components: &'a mut Vec<ScoreComponent>,
}

impl<'a> Tally<'a> {
    fn start(dimension: Dimension, components: &'a mut Vec<ScoreComponent>) -> Self {
        Self {
            dimension,
            total: BASE_SCORE,
            components,
        }
    }

    fn adjust(&mut self, delta: i16, note: String) {
        self.total += i32::from(delta);
        self.components.push(ScoreComponent {
            dimension: self.dimension,
            delta,
            note,
        });
    }

    fn finish(self) -> DimensionScore {
        DimensionScore::clamped(self.total)
    }
}

pub(crate) fn score_attributes(
    attributes: &ProductAttributes,
    tiers: &TierConfig,
) -> (ScoreSheet, Vec<ScoreComponent>) {
    let materials = material_signals(attributes, tiers);
    let brand = brand_signals(attributes, tiers);
    let mut components = Vec::new();

    let mut quality = Tally::start(Dimension::Quality, &mut components);
    if let Some(material) = &materials.premium {
        quality.adjust(15, format!("premium material '{material}'"));
    }
    if let Some(material) = &materials.avoid {
        quality.adjust(-20, format!("low-grade material '{material}'"));
    }
    match attributes.price.filter(|price| price.is_finite()) {
        Some(price) if price > HIGH_PRICE => {
            quality.adjust(10, format!("price {price:.2} above {HIGH_PRICE:.0}"));
        }
        Some(price) if price < LOW_PRICE => {
            quality.adjust(-10, format!("price {price:.2} below {LOW_PRICE:.0}"));
        }
        _ => {}
    }
    let quality = quality.finish();

    let mut construction = Tally::start(Dimension::Construction, &mut components);
    if let Some(name) = &brand.high {
        construction.adjust(15, format!("brand matches high-reputation '{name}'"));
    }
    if let Some(name) = &brand.low {
        construction.adjust(-15, format!("brand matches low-reputation '{name}'"));
    }
    if let Some(material) = &materials.premium {
        construction.adjust(10, format!("premium material '{material}'"));
    }
    let construction = construction.finish();

    let mut ethics = Tally::start(Dimension::Ethics, &mut components);
    if let Some(name) = &brand.high {
        ethics.adjust(20, format!("brand matches high-ethics '{name}'"));
    }
    if let Some(name) = &brand.medium {
        ethics.adjust(10, format!("brand matches medium-ethics '{name}'"));
    }
    if let Some(name) = &brand.low {
        ethics.adjust(-20, format!("brand matches low-ethics '{name}'"));
    }
    if let Some(material) = &materials.premium {
        ethics.adjust(10, format!("premium material '{material}'"));
    }
    if let Some(material) = &materials.avoid {
        ethics.adjust(-15, format!("low-grade material '{material}'"));
    }
    let ethics = ethics.finish();

    let durability = durability_score(quality, construction);
    let overall = overall_score(quality, construction, ethics);

    let sheet = ScoreSheet {
        quality,
        construction,
        durability,
        ethics,
        overall,
    };

    (sheet, components)
}

/// `round((quality + construction) / 2)`, rounding halves up.
pub(crate) fn durability_score(
    quality: DimensionScore,
    construction: DimensionScore,
) -> DimensionScore {
    let sum = i32::from(quality.value()) + i32::from(construction.value());
    DimensionScore::clamped((sum + 1) / 2)
}

/// `round(0.4 * quality + 0.3 * construction + 0.3 * ethics)` in tenths, rounding halves up.
pub(crate) fn overall_score(
    quality: DimensionScore,
    construction: DimensionScore,
    ethics: DimensionScore,
) -> DimensionScore {
    let tenths = 4 * i32::from(quality.value())
        + 3 * i32::from(construction.value())
        + 3 * i32::from(ethics.value());
    DimensionScore::clamped((tenths + 5) / 10)
}

fn material_signals(attributes: &ProductAttributes, tiers: &TierConfig) -> MaterialSignals {
    let tokens = attributes.material_tokens();
    MaterialSignals {
        premium: first_material_match(&tokens, &tiers.materials.premium),
        avoid: first_material_match(&tokens, &tiers.materials.avoid),
    }
}

fn first_material_match(tokens: &[String], tier: &[String]) -> Option<String> {
    tokens.iter().find_map(|token| {
        tier.iter()
            .find(|material| token.contains(material.as_str()))
            .cloned()
    })
}

fn brand_signals(attributes: &ProductAttributes, tiers: &TierConfig) -> BrandSignals {
    let brand = attributes.brand.trim().to_lowercase();
    BrandSignals {
        high: first_brand_match(&brand, &tiers.brands.high),
        medium: first_brand_match(&brand, &tiers.brands.medium),
        low: first_brand_match(&brand, &tiers.brands.low),
    }
}

fn first_brand_match(brand: &str, tier: &[String]) -> Option<String> {
    tier.iter().find(|name| brand.contains(name.as_str())).cloned()
}
