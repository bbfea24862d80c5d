//! The full mint pipeline: seed in, reproducible artifact out.

use serde::{Deserialize, Serialize};

use crate::fortune;
use crate::hash::{self, EngineError};
use crate::metadata::{self, Attribute, NftMetadata};
use crate::palette::ColorSet;
use crate::pattern::PixelPattern;
use crate::rarity::RarityTier;

/// Everything derived from one seed: the unit a mint request produces and
/// the unit the renderer and metadata export consume. Value-equal whenever
/// the seed is equal; no state survives past the request that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintArtifact {
    pub seed: u64,
    pub tier: RarityTier,
    pub pattern: PixelPattern,
    pub palette: ColorSet,
    pub serial: String,
    pub attributes: Vec<Attribute>,
    pub fortune: String,
}

impl MintArtifact {
    /// Derives the complete artifact from a seed. Pure and total.
    pub fn from_seed(seed: u64) -> Self {
        let tier = RarityTier::from_seed(seed);
        Self {
            seed,
            tier,
            pattern: PixelPattern::generate(seed, tier),
            palette: ColorSet::generate(seed, tier),
            serial: metadata::allocate_serial(seed),
            attributes: metadata::build_attributes(tier, seed),
            fortune: fortune::message_for(tier, seed).to_string(),
        }
    }

    /// Hashes an identifier and derives its artifact. Fails only when the
    /// hasher rejects the identifier.
    pub fn from_identifier(raw: &str) -> Result<Self, EngineError> {
        Ok(Self::from_seed(hash::hash_identifier(raw)?))
    }

    /// Rolls a fresh random seed and derives its artifact.
    pub fn random() -> Self {
        Self::from_seed(hash::random_seed())
    }

    /// Builds the exportable metadata record. `collection` is the display
    /// prefix, e.g. "Pixelmint" gives "Pixelmint #00042/10000".
    pub fn metadata(&self, collection: &str) -> NftMetadata {
        NftMetadata {
            name: format!("{} {}", collection, self.serial),
            description: format!("{}. {}", self.tier.properties().description, self.fortune),
            attributes: self.attributes.clone(),
        }
    }

    /// File stem for exports: `Pixelmint_<Tier>-<NNNNN>_<YYYYMMDD_HHMMSS>UTC`.
    ///
    /// The timestamp lives only in the file name so rapid successive mints
    /// get unique paths; the artifact itself stays reproducible.
    pub fn export_stem(&self) -> String {
        let number = metadata::serial_number(self.seed);
        let now = chrono::Utc::now();
        format!(
            "Pixelmint_{}-{:05}_{}UTC",
            self.tier.display_name(),
            number,
            now.format("%Y%m%d_%H%M%S")
        )
    }
}
