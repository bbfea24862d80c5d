//! Deterministic color palette generation.
//!
//! Common through Silver derive their hues from the seed with a fixed
//! multiplicative stride; Gold and Platinum override primary/secondary/
//! accent with fixed metal constants while one gradient stop still varies
//! with the seed. All arithmetic is integer-only so emitted strings and
//! RGB bytes are exact on every platform.

use serde::{Deserialize, Serialize};

use crate::rarity::RarityTier;

/// Fixed primary for Gold mints, independent of seed.
pub const GOLD_PRIMARY: &str = "#FFD700";
/// Fixed primary for Platinum mints, independent of seed.
pub const PLATINUM_PRIMARY: &str = "#E5E4E2";

const GOLD_SECONDARY: &str = "#B8860B";
const GOLD_ACCENT: &str = "#FFF8DC";
const PLATINUM_SECONDARY: &str = "#BCC6CC";
const PLATINUM_ACCENT: &str = "#F8F8FF";

const GOLD_PRIMARY_RGB: [u8; 3] = [0xFF, 0xD7, 0x00];
const GOLD_SECONDARY_RGB: [u8; 3] = [0xB8, 0x86, 0x0B];
const GOLD_ACCENT_RGB: [u8; 3] = [0xFF, 0xF8, 0xDC];
const PLATINUM_PRIMARY_RGB: [u8; 3] = [0xE5, 0xE4, 0xE2];
const PLATINUM_SECONDARY_RGB: [u8; 3] = [0xBC, 0xC6, 0xCC];
const PLATINUM_ACCENT_RGB: [u8; 3] = [0xF8, 0xF8, 0xFF];

/// Hue stride: coprime with 360 so consecutive seeds walk the wheel.
const HUE_STRIDE: u64 = 137;
/// Offset to the companion (analogous) hue.
const COMPANION_OFFSET: u64 = 40;

/// Base hue in `[0, 360)` for a seed. Shared with attribute labeling.
pub(crate) fn base_hue(seed: u64) -> u64 {
    (seed % 360) * HUE_STRIDE % 360
}

/// The color set of one artifact. Strings are CSS-compatible; the RGB
/// triples carry the same colors for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background_gradient: [String; 2],
    primary_rgb: [u8; 3],
    secondary_rgb: [u8; 3],
    accent_rgb: [u8; 3],
    background_rgb: [u8; 3],
}

impl ColorSet {
    /// Generates the palette for (seed, tier). Pure and total.
    pub fn generate(seed: u64, tier: RarityTier) -> Self {
        match tier {
            RarityTier::Gold => Self::metal(
                GOLD_PRIMARY,
                GOLD_SECONDARY,
                GOLD_ACCENT,
                GOLD_PRIMARY_RGB,
                GOLD_SECONDARY_RGB,
                GOLD_ACCENT_RGB,
                // Warm gradient hue in [30, 90).
                30 + (seed % 60) * HUE_STRIDE % 60,
            ),
            RarityTier::Platinum => Self::metal(
                PLATINUM_PRIMARY,
                PLATINUM_SECONDARY,
                PLATINUM_ACCENT,
                PLATINUM_PRIMARY_RGB,
                PLATINUM_SECONDARY_RGB,
                PLATINUM_ACCENT_RGB,
                // Cool gradient hue in [180, 260).
                180 + (seed % 80) * HUE_STRIDE % 80,
            ),
            _ => Self::derived(seed, tier),
        }
    }

    /// Seed-derived palette for Common/Uncommon/Silver.
    fn derived(seed: u64, tier: RarityTier) -> Self {
        let hue = base_hue(seed);
        let companion = (hue + COMPANION_OFFSET) % 360;
        let contrast = (hue + 180) % 360;

        // Silver reads desaturated; the greener tiers get more chroma.
        let base_sat = match tier {
            RarityTier::Common => 42,
            RarityTier::Uncommon => 52,
            _ => 24,
        };
        let sat = base_sat + seed % 16;
        let light = 50 + seed / 7 % 10;

        Self {
            primary: hsl(hue, sat, light),
            secondary: hsl(companion, sat, 40),
            accent: hsl(contrast, sat + 10, 62),
            background_gradient: [hsl(hue, sat / 2, 16), hsl(companion, sat / 2, 9)],
            primary_rgb: hsl_to_rgb(hue, sat, light),
            secondary_rgb: hsl_to_rgb(companion, sat, 40),
            accent_rgb: hsl_to_rgb(contrast, sat + 10, 62),
            background_rgb: hsl_to_rgb(hue, sat / 2, 16),
        }
    }

    /// Fixed metal palette for Gold/Platinum; only the gradient varies.
    fn metal(
        primary: &str,
        secondary: &str,
        accent: &str,
        primary_rgb: [u8; 3],
        secondary_rgb: [u8; 3],
        accent_rgb: [u8; 3],
        gradient_hue: u64,
    ) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background_gradient: [hsl(gradient_hue, 35, 14), hsl(gradient_hue, 30, 7)],
            primary_rgb,
            secondary_rgb,
            accent_rgb,
            background_rgb: hsl_to_rgb(gradient_hue, 35, 14),
        }
    }

    pub fn primary_rgb(&self) -> [u8; 3] {
        self.primary_rgb
    }

    pub fn secondary_rgb(&self) -> [u8; 3] {
        self.secondary_rgb
    }

    pub fn accent_rgb(&self) -> [u8; 3] {
        self.accent_rgb
    }

    pub fn background_rgb(&self) -> [u8; 3] {
        self.background_rgb
    }
}

/// Formats an hsl() string from integer components.
fn hsl(hue: u64, sat: u64, light: u64) -> String {
    format!("hsl({}, {}%, {}%)", hue, sat, light)
}

/// Integer HSL to RGB conversion (per-mille fixed point, no floats).
fn hsl_to_rgb(hue: u64, sat: u64, light: u64) -> [u8; 3] {
    let h = (hue % 360) as i64;
    let s = (sat.min(100) * 10) as i64; // 0..=1000
    let l = (light.min(100) * 10) as i64; // 0..=1000

    let c = (1000 - (2 * l - 1000).abs()) * s / 1000;
    let hp = h * 1000 / 60; // 0..6000
    let x = c * (1000 - ((hp % 2000) - 1000).abs()) / 1000;
    let m = l - c / 2;

    let (r1, g1, b1) = match hp / 1000 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let to_byte = |v: i64| (((v + m).clamp(0, 1000)) * 255 / 1000) as u8;
    [to_byte(r1), to_byte(g1), to_byte(b1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_yield_identical_palettes() {
        let a = ColorSet::generate(12345, RarityTier::Uncommon);
        let b = ColorSet::generate(12345, RarityTier::Uncommon);
        assert_eq!(a, b);
    }

    #[test]
    fn gold_primary_is_fixed_regardless_of_seed() {
        for seed in [0u64, 1, 12345, 999_999, u64::MAX] {
            let p = ColorSet::generate(seed, RarityTier::Gold);
            assert_eq!(p.primary, GOLD_PRIMARY);
            assert_eq!(p.secondary, GOLD_SECONDARY);
            assert_eq!(p.accent, GOLD_ACCENT);
        }
    }

    #[test]
    fn platinum_primary_is_fixed_regardless_of_seed() {
        for seed in [0u64, 1, 12345, 999_999, u64::MAX] {
            let p = ColorSet::generate(seed, RarityTier::Platinum);
            assert_eq!(p.primary, PLATINUM_PRIMARY);
        }
    }

    #[test]
    fn metal_gradient_still_varies_with_seed() {
        let a = ColorSet::generate(1, RarityTier::Gold);
        let b = ColorSet::generate(2, RarityTier::Gold);
        assert_ne!(a.background_gradient, b.background_gradient);
    }

    #[test]
    fn derived_tiers_emit_hsl_strings() {
        for tier in [RarityTier::Common, RarityTier::Uncommon, RarityTier::Silver] {
            let p = ColorSet::generate(4242, tier);
            for color in [&p.primary, &p.secondary, &p.accent] {
                assert!(
                    color.starts_with("hsl(") && color.ends_with(')'),
                    "{tier:?}: {color}"
                );
            }
        }
    }

    #[test]
    fn different_seeds_give_different_derived_palettes() {
        let a = ColorSet::generate(10, RarityTier::Common);
        let b = ColorSet::generate(11, RarityTier::Common);
        assert_ne!(a.primary, b.primary);
    }

    #[test]
    fn boundary_seeds_generate_without_panic() {
        for tier in RarityTier::all() {
            let _ = ColorSet::generate(0, *tier);
            let _ = ColorSet::generate(u64::MAX, *tier);
        }
    }

    #[test]
    fn hsl_to_rgb_hits_the_primaries() {
        assert_eq!(hsl_to_rgb(0, 100, 50), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120, 100, 50), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240, 100, 50), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0, 0, 100), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(0, 0, 0), [0, 0, 0]);
    }

    #[test]
    fn base_hue_stays_on_the_wheel() {
        for seed in [0u64, 359, 360, 12345, u64::MAX] {
            assert!(base_hue(seed) < 360);
        }
    }
}
