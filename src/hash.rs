//! Identifier hashing and seed sourcing.
//!
//! `hash_identifier` is a durable-contract function: the integer it returns
//! for a given string is baked into minted metadata and must never change.
//! It is a dispersion hash, not a cryptographic one; collisions are fine.

use rand::Rng;
use thiserror::Error;

/// Modulus applied while accumulating the dispersion hash so the running
/// value never grows past 64 bits. Part of the durable format.
const DISPERSION_MODULUS: u64 = 1_000_000_007;

/// Multiplier for the dispersion hash (classic small prime).
const DISPERSION_PRIME: u64 = 31;

/// `random_seed` draws from `[0, RANDOM_SEED_SPAN)`.
pub const RANDOM_SEED_SPAN: u64 = 1_000_000;

/// Errors raised by the engine core. Only the hasher can fail; every other
/// component is total over its typed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// A small non-cryptographic mixer (good enough for stable jitter).
pub(crate) fn mix32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

/// Fold a 64-bit seed into 32 bits for the mixer.
pub(crate) fn fold_seed(seed: u64) -> u32 {
    (seed as u32) ^ ((seed >> 32) as u32)
}

/// Hashes an identifier string into a stable non-negative seed.
///
/// Three paths, all deterministic forever:
/// - the empty string (after trimming) maps to 0;
/// - all-decimal strings parse to their integer value (falling through to
///   the dispersion hash when they exceed `u64`);
/// - `0x`-prefixed addresses (and any other string) go through the
///   dispersion hash. An address that is empty after stripping the prefix
///   is rejected with [`EngineError::InvalidIdentifier`].
pub fn hash_identifier(raw: &str) -> Result<u64, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    if let Some(tail) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        if tail.is_empty() {
            return Err(EngineError::InvalidIdentifier(
                "address is empty after 0x prefix".to_string(),
            ));
        }
        return Ok(dispersion_hash(tail));
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(value);
        }
        // Numeric IDs wider than u64 still hash deterministically.
        return Ok(dispersion_hash(trimmed));
    }

    Ok(dispersion_hash(trimmed))
}

/// Multiply-add dispersion over code points, reduced every step.
///
/// ASCII is lowercased first so checksummed and plain hex addresses agree.
fn dispersion_hash(s: &str) -> u64 {
    let mut h: u64 = 0;
    for ch in s.chars() {
        let cp = u64::from(ch.to_ascii_lowercase() as u32);
        h = (h * DISPERSION_PRIME + cp) % DISPERSION_MODULUS;
    }
    h
}

/// Fresh pseudo-random seed in `[0, 999_999]` for non-deterministic mints.
///
/// Uses OS entropy via `rand`; two calls may coincidentally collide and
/// that is fine. Never use this for seed-derived generation.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..RANDOM_SEED_SPAN)
}
