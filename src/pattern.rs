//! Deterministic pixel pattern generation.
//!
//! Cells come from mixing (seed, row, col) through the crate's fixed
//! bit-mixing constants and taking the low bit. Columns are mirrored
//! left/right for the classic avatar look. No platform RNG is involved
//! anywhere, so a grid regenerated years later is bit-identical.

use serde::{Deserialize, Serialize};

use crate::hash::{fold_seed, mix32};
use crate::rarity::RarityTier;

const PATTERN_SALT: u32 = 0x51D1_7E41;
const ROW_SALT: u32 = 0x9E37_79B9;
const COL_SALT: u32 = 0x85EB_CA6B;

/// A square grid of boolean cells, fully determined by (seed, tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPattern {
    side: usize,
    cells: Vec<bool>,
}

impl PixelPattern {
    /// Grid side length for a tier. Monotonically increasing with rarity;
    /// these numbers are part of the durable format.
    pub fn side_for(tier: RarityTier) -> usize {
        match tier {
            RarityTier::Common => 8,
            RarityTier::Uncommon => 10,
            RarityTier::Silver => 12,
            RarityTier::Gold => 14,
            RarityTier::Platinum => 16,
        }
    }

    /// Generates the pattern for (seed, tier). Pure and total.
    pub fn generate(seed: u64, tier: RarityTier) -> Self {
        let side = Self::side_for(tier);
        let base = mix32(fold_seed(seed) ^ PATTERN_SALT);

        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                // Mirror around the vertical axis.
                let mcol = col.min(side - 1 - col);
                let h = mix32(
                    base ^ (row as u32).wrapping_mul(ROW_SALT)
                        ^ (mcol as u32).wrapping_mul(COL_SALT),
                );
                cells.push(h & 1 == 1);
            }
        }

        Self { side, cells }
    }

    /// Side length of the square grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Cell value at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `[0, side)`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.side && col < self.side, "cell out of range");
        self.cells[row * self.side + col]
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of filled cells, in `[0, 1]`.
    pub fn density(&self) -> f64 {
        self.filled() as f64 / self.cells.len() as f64
    }

    /// Iterator over rows as boolean slices.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.side)
    }
}
