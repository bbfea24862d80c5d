//! Rarity classification and the static tier catalog.
//!
//! Classification is pure integer bucket arithmetic over a fixed modulus.
//! The bucket boundaries are part of the durable format: a seed minted
//! years ago must classify to the same tier today.

use serde::{Deserialize, Serialize};

/// Working modulus for classification. Seeds reduce into `[0, 1_000_000)`.
pub const CLASSIFIER_MODULUS: u64 = 1_000_000;

// Cumulative bucket floors (half-open intervals, no gaps, no overlaps):
//   [0, 800_000)          Common    80%
//   [800_000, 950_000)    Uncommon  15%
//   [950_000, 990_000)    Silver     4%
//   [990_000, 999_900)    Gold       0.99%
//   [999_900, 1_000_000)  Platinum   0.01%
const UNCOMMON_FLOOR: u64 = 800_000;
const SILVER_FLOOR: u64 = 950_000;
const GOLD_FLOOR: u64 = 990_000;
const PLATINUM_FLOOR: u64 = 999_900;

/// The five rarity tiers, ordered most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Common,
    Uncommon,
    Silver,
    Gold,
    Platinum,
}

/// Static visual and metadata properties of a tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierProperties {
    pub name: &'static str,
    /// Display color as a 6-hex-digit RGB string.
    pub color: &'static str,
    /// Same color as raw bytes, for the renderer.
    pub color_rgb: [u8; 3],
    /// Strictly increases with rarity.
    pub glow_intensity: u8,
    /// Frame thickness in pattern cells.
    pub border_width: u32,
    pub has_sparkles: bool,
    pub has_halo: bool,
    /// Declared drop rate in percent. The five rates sum to 100.
    pub rate: f64,
    pub description: &'static str,
}

static COMMON_PROPS: TierProperties = TierProperties {
    name: "Common",
    color: "#9CA3AF",
    color_rgb: [0x9C, 0xA3, 0xAF],
    glow_intensity: 0,
    border_width: 1,
    has_sparkles: false,
    has_halo: false,
    rate: 80.0,
    description: "A solid everyday mint",
};

static UNCOMMON_PROPS: TierProperties = TierProperties {
    name: "Uncommon",
    color: "#34D399",
    color_rgb: [0x34, 0xD3, 0x99],
    glow_intensity: 1,
    border_width: 1,
    has_sparkles: false,
    has_halo: false,
    rate: 15.0,
    description: "A mint with a little extra shine",
};

static SILVER_PROPS: TierProperties = TierProperties {
    name: "Silver",
    color: "#C0C0C0",
    color_rgb: [0xC0, 0xC0, 0xC0],
    glow_intensity: 2,
    border_width: 2,
    has_sparkles: false,
    has_halo: false,
    rate: 4.0,
    description: "A silver-grade mint, few and far between",
};

static GOLD_PROPS: TierProperties = TierProperties {
    name: "Gold",
    color: "#FFD700",
    color_rgb: [0xFF, 0xD7, 0x00],
    glow_intensity: 3,
    border_width: 2,
    has_sparkles: true,
    has_halo: false,
    rate: 0.99,
    description: "A gold-grade mint, roughly one in a hundred",
};

static PLATINUM_PROPS: TierProperties = TierProperties {
    name: "Platinum",
    color: "#E5E4E2",
    color_rgb: [0xE5, 0xE4, 0xE2],
    glow_intensity: 4,
    border_width: 3,
    has_sparkles: true,
    has_halo: true,
    rate: 0.01,
    description: "A platinum-grade mint, one in ten thousand",
};

impl RarityTier {
    /// All tiers, most to least common.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Common,
            Self::Uncommon,
            Self::Silver,
            Self::Gold,
            Self::Platinum,
        ]
    }

    /// Classifies a seed into a tier. Total over all of `u64`, pure, and
    /// stable forever: the seed reduces modulo [`CLASSIFIER_MODULUS`] and
    /// falls into exactly one half-open bucket.
    pub fn from_seed(seed: u64) -> Self {
        let roll = seed % CLASSIFIER_MODULUS;
        if roll < UNCOMMON_FLOOR {
            Self::Common
        } else if roll < SILVER_FLOOR {
            Self::Uncommon
        } else if roll < GOLD_FLOOR {
            Self::Silver
        } else if roll < PLATINUM_FLOOR {
            Self::Gold
        } else {
            Self::Platinum
        }
    }

    /// Static property record for this tier.
    pub fn properties(self) -> &'static TierProperties {
        match self {
            Self::Common => &COMMON_PROPS,
            Self::Uncommon => &UNCOMMON_PROPS,
            Self::Silver => &SILVER_PROPS,
            Self::Gold => &GOLD_PROPS,
            Self::Platinum => &PLATINUM_PROPS,
        }
    }

    /// Human-readable display name ("Gold", not "GOLD").
    pub fn display_name(self) -> &'static str {
        self.properties().name
    }

    /// Display color as a hex string.
    pub fn color(self) -> &'static str {
        self.properties().color
    }
}
