//! Pixelmint - deterministic rarity and generative pixel-art engine.
//!
//! Maps an arbitrary user identifier (a numeric ID string or a `0x`-prefixed
//! wallet address) to a reproducible mint artifact: an integer seed, a rarity
//! tier drawn from a fixed probability table, a mirrored pixel grid, a color
//! palette, a serial number, NFT trait attributes and a fortune message.
//!
//! Everything derived from a seed uses explicit integer bit mixing with fixed
//! constants, so the same (seed, tier) pair yields bit-identical output on
//! any platform, in any process, at any time. Minted metadata must be
//! regenerable on demand; treat the mixing constants and bucket boundaries
//! in this crate as part of the wire format.
//!
//! The only fallible core operation is [`hash_identifier`]; every other
//! function is total over its typed inputs.

pub mod artifact;
pub mod fortune;
pub mod hash;
pub mod metadata;
pub mod palette;
pub mod pattern;
pub mod rarity;
pub mod render;

pub use artifact::MintArtifact;
pub use fortune::message_for;
pub use hash::{hash_identifier, random_seed, EngineError};
pub use metadata::{allocate_serial, build_attributes, Attribute, AttributeValue, NftMetadata, MAX_SUPPLY};
pub use palette::ColorSet;
pub use pattern::PixelPattern;
pub use rarity::{RarityTier, TierProperties};
