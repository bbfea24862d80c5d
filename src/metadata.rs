//! Serial allocation and NFT trait attributes.

use serde::{Deserialize, Serialize};

use crate::palette;
use crate::pattern::PixelPattern;
use crate::rarity::RarityTier;

/// Fixed collection size. Serial numbers land in `[1, MAX_SUPPLY]`.
pub const MAX_SUPPLY: u64 = 10_000;

/// Hue-family labels, one per 30-degree slice of the wheel.
static SCHEME_NAMES: [&str; 12] = [
    "Scarlet", "Amber", "Chartreuse", "Emerald", "Jade", "Cyan", "Azure", "Sapphire", "Violet",
    "Magenta", "Fuchsia", "Rose",
];

/// The bare serial number for a seed, in `[1, MAX_SUPPLY]`. Single source
/// of truth for every place that names a mint by its number.
pub fn serial_number(seed: u64) -> u64 {
    seed % MAX_SUPPLY + 1
}

/// Maps a seed to a formatted serial: `#NNNNN/10000`, zero-padded to five
/// digits, never 0 and never above [`MAX_SUPPLY`]. Pure and total.
pub fn allocate_serial(seed: u64) -> String {
    format!("#{:05}/{}", serial_number(seed), MAX_SUPPLY)
}

/// One NFT trait entry. `value` serializes as a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

impl Attribute {
    fn text(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
        }
    }

    fn number(trait_type: &str, value: u64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
        }
    }
}

/// Attribute values keep numbers numeric in exported JSON; `Seed` must not
/// come out stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(u64),
    Text(String),
}

/// ERC-721-style metadata record, exported as pretty JSON by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
}

/// Builds the ordered trait list for (tier, seed).
///
/// Always starts with `Rarity` (display name) and `Seed` (numeric); the
/// derived traits that follow are deterministic functions of the same pair.
pub fn build_attributes(tier: RarityTier, seed: u64) -> Vec<Attribute> {
    let pattern = PixelPattern::generate(seed, tier);
    vec![
        Attribute::text("Rarity", tier.display_name()),
        Attribute::number("Seed", seed),
        Attribute::text("Pattern Density", density_label(pattern.density())),
        Attribute::text("Color Scheme", color_scheme_label(seed, tier)),
        Attribute::text("Generation", "Deterministic v1"),
    ]
}

/// Buckets a fill fraction into a display label.
fn density_label(density: f64) -> &'static str {
    if density < 0.35 {
        "Sparse"
    } else if density < 0.55 {
        "Balanced"
    } else {
        "Dense"
    }
}

/// Names the palette family. The metal tiers have fixed palettes, so they
/// get fixed labels; the rest bucket the derived base hue.
fn color_scheme_label(seed: u64, tier: RarityTier) -> &'static str {
    match tier {
        RarityTier::Gold => "Gilded",
        RarityTier::Platinum => "Polar",
        _ => SCHEME_NAMES[(palette::base_hue(seed) / 30) as usize],
    }
}
