//! Fortune messages, one small fixed pool per tier.
//!
//! Selection is deterministic (seed-indexed) so a regenerated artifact
//! carries the same flavor text it minted with.

use crate::hash::{fold_seed, mix32};
use crate::rarity::RarityTier;

const FORTUNE_SALT: u32 = 0x51D1_7E21;

static COMMON_FORTUNES: &[&str] = &[
    "Every collection starts somewhere.",
    "Steady hands mint steady art.",
    "Common today, classic tomorrow.",
    "The crowd is where the stories are.",
];

static UNCOMMON_FORTUNES: &[&str] = &[
    "A little luck goes a long way.",
    "You caught the current early.",
    "Not everyone rolls this well.",
];

static SILVER_FORTUNES: &[&str] = &[
    "Silver linings are earned, not found.",
    "Second place in a race of thousands.",
    "Polished, precise, and hard to come by.",
];

static GOLD_FORTUNES: &[&str] = &[
    "Fortune favors the bold mint.",
    "One roll in a hundred lands here.",
    "Gold does not tarnish, and neither will this.",
];

static PLATINUM_FORTUNES: &[&str] = &[
    "One in ten thousand. Keep the seed safe.",
    "The rarest air is the thinnest.",
    "Lightning, bottled.",
];

/// Picks a non-empty fortune for (tier, seed). Total over the five tiers;
/// the same pair always returns the same message.
pub fn message_for(tier: RarityTier, seed: u64) -> &'static str {
    let pool = pool_for(tier);
    let idx = mix32(fold_seed(seed) ^ FORTUNE_SALT) as usize % pool.len();
    pool[idx]
}

fn pool_for(tier: RarityTier) -> &'static [&'static str] {
    match tier {
        RarityTier::Common => COMMON_FORTUNES,
        RarityTier::Uncommon => UNCOMMON_FORTUNES,
        RarityTier::Silver => SILVER_FORTUNES,
        RarityTier::Gold => GOLD_FORTUNES,
        RarityTier::Platinum => PLATINUM_FORTUNES,
    }
}
