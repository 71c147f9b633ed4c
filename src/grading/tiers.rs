use serde::{Deserialize, Serialize};

/// Curated material lists. Entries match as substrings of each material token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialTiers {
    pub premium: Vec<String>,
    pub good: Vec<String>,
    pub avoid: Vec<String>,
}

/// Curated brand reputation lists. Entries match as substrings of the product brand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandTiers {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

/// Reference data injected into the grading engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    #[serde(default)]
    pub materials: MaterialTiers,
    #[serde(default)]
    pub brands: BrandTiers,
}

impl TierConfig {
    /// Built-in tier lists used when no override file is configured.
    pub fn standard() -> Self {
        Self {
            materials: MaterialTiers {
                premium: owned(&["wool", "silk", "cashmere", "linen", "organic cotton"]),
                good: owned(&["cotton", "denim", "leather", "suede"]),
                avoid: owned(&["polyester", "acrylic", "nylon", "spandex", "rayon"]),
            },
            brands: BrandTiers {
                high: owned(&[
                    "patagonia",
                    "eileen fisher",
                    "reformation",
                    "everlane",
                    "people tree",
                    "pact",
                ]),
                medium: owned(&["levi", "uniqlo", "madewell", "j.crew", "gap"]),
                low: owned(&[
                    "shein",
                    "fashion nova",
                    "boohoo",
                    "romwe",
                    "zaful",
                    "forever 21",
                ]),
            },
        }
    }

    /// Lowercases and trims every entry, dropping blanks so an empty string never matches
    /// every product.
    pub fn normalized(&self) -> Self {
        Self {
            materials: MaterialTiers {
                premium: normalize(&self.materials.premium),
                good: normalize(&self.materials.good),
                avoid: normalize(&self.materials.avoid),
            },
            brands: BrandTiers {
                high: normalize(&self.brands.high),
                medium: normalize(&self.brands.medium),
                low: normalize(&self.brands.low),
            },
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

fn normalize(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}
