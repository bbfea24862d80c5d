//! PNG export and import of mint artifacts.
//!
//! The rendered image carries the full artifact JSON (zstd-compressed,
//! base64-encoded) in a `PixelmintArtifact` text chunk, so a minted file
//! can be reopened and its artifact reconstructed without the original
//! identifier.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use base64::Engine;

use crate::artifact::MintArtifact;
use crate::hash::{fold_seed, mix32};

const METADATA_KEYWORD: &str = "PixelmintArtifact";
const ZSTD_LEVEL: i32 = 3;
const SPARKLE_SALT: u32 = 0x51D1_7E61;

/// Upper bound on pixels per cell. Keeps the image dimension and the
/// RGB buffer size well inside `u32`/`usize` for every tier layout.
pub const MAX_SCALE: u32 = 256;

/// Renders the artifact to an RGB PNG at `path`.
///
/// Layout, inside out: the pattern upscaled `scale` pixels per cell
/// (filled cells in the primary color, sparkle cells in the accent color
/// for the flagged tiers, empty cells in the background color), a frame of
/// `border_width` cells in the tier color, and for halo tiers one extra
/// accent ring outside the frame.
pub fn save_artifact_png(path: &Path, artifact: &MintArtifact, scale: u32) -> anyhow::Result<()> {
    if scale == 0 || scale > MAX_SCALE {
        anyhow::bail!("scale must be in 1..={}, got {}", MAX_SCALE, scale);
    }

    let side = artifact.pattern.side() as u32;
    let props = artifact.tier.properties();
    let halo: u32 = if props.has_halo { 1 } else { 0 };
    let margin = props.border_width + halo;
    let dim = (side + margin * 2) * scale;

    let primary = artifact.palette.primary_rgb();
    let accent = artifact.palette.accent_rgb();
    let background = artifact.palette.background_rgb();
    let frame = props.color_rgb;

    // 1. Compose the image
    let mut img_data = vec![0u8; dim as usize * dim as usize * 3];
    for y in 0..dim {
        for x in 0..dim {
            let edge = [x, y, dim - 1 - x, dim - 1 - y]
                .into_iter()
                .min()
                .unwrap_or(0)
                / scale;

            let rgb = if edge < halo {
                accent
            } else if edge < margin {
                frame
            } else {
                let row = (y / scale - margin) as usize;
                let col = (x / scale - margin) as usize;
                if artifact.pattern.get(row, col) {
                    if props.has_sparkles && is_sparkle(artifact.seed, row, col) {
                        accent
                    } else {
                        primary
                    }
                } else {
                    background
                }
            };

            let i = (y as usize * dim as usize + x as usize) * 3;
            img_data[i] = rgb[0];
            img_data[i + 1] = rgb[1];
            img_data[i + 2] = rgb[2];
        }
    }

    // 2. Serialize and compress the artifact
    let json = serde_json::to_string(artifact)?;
    let compressed = zstd::encode_all(json.as_bytes(), ZSTD_LEVEL)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&compressed);

    // 3. Write PNG with the custom text chunk
    let file = std::fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, dim, dim);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.add_text_chunk(METADATA_KEYWORD.to_string(), encoded)?;

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&img_data)?;

    Ok(())
}

/// Reads a PNG written by [`save_artifact_png`] and reconstructs its
/// artifact from the embedded chunk.
pub fn load_artifact_png(path: &Path) -> anyhow::Result<MintArtifact> {
    let file = std::fs::File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()?;

    // Consume the image so trailing text chunks are available.
    let mut buf = vec![0; reader.output_buffer_size()];
    reader.next_frame(&mut buf)?;

    let text_chunks = reader.info().uncompressed_latin1_text.clone();
    for chunk in text_chunks.iter() {
        if chunk.keyword == METADATA_KEYWORD {
            let compressed = base64::engine::general_purpose::STANDARD.decode(&chunk.text)?;
            let json = zstd::decode_all(&compressed[..])?;
            let artifact: MintArtifact = serde_json::from_slice(&json)?;
            return Ok(artifact);
        }
    }

    anyhow::bail!("no {} metadata found in PNG", METADATA_KEYWORD)
}

/// Deterministic sparkle placement for the flagged tiers: roughly one
/// filled cell in nine gets the accent color.
fn is_sparkle(seed: u64, row: usize, col: usize) -> bool {
    let h = mix32(
        fold_seed(seed)
            ^ SPARKLE_SALT
            ^ (row as u32).wrapping_mul(0x9E37_79B9)
            ^ (col as u32).wrapping_mul(0x85EB_CA6B),
    );
    h % 9 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::RarityTier;

    fn temp_png(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pixelmint_{}_{}.png", tag, std::process::id()))
    }

    #[test]
    fn png_roundtrip_reconstructs_the_artifact() {
        let artifact = MintArtifact::from_seed(12345);
        let path = temp_png("roundtrip");
        save_artifact_png(&path, &artifact, 8).unwrap();
        let restored = load_artifact_png(&path).unwrap();
        assert_eq!(artifact, restored);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn platinum_render_includes_halo_ring() {
        // Platinum seeds sit at the top of the modulus range.
        let artifact = MintArtifact::from_seed(999_950);
        assert_eq!(artifact.tier, RarityTier::Platinum);
        let path = temp_png("halo");
        save_artifact_png(&path, &artifact, 4).unwrap();
        let restored = load_artifact_png(&path).unwrap();
        assert_eq!(restored.tier, RarityTier::Platinum);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let artifact = MintArtifact::from_seed(1);
        let path = temp_png("zero_scale");
        assert!(save_artifact_png(&path, &artifact, 0).is_err());
    }

    #[test]
    fn oversized_scale_is_rejected() {
        // Past the ceiling the dimension math would overflow u32; the
        // guard has to fire before any arithmetic runs.
        let artifact = MintArtifact::from_seed(1);
        let path = temp_png("oversized_scale");
        assert!(save_artifact_png(&path, &artifact, MAX_SCALE + 1).is_err());
        assert!(save_artifact_png(&path, &artifact, 40_000).is_err());
        assert!(save_artifact_png(&path, &artifact, u32::MAX).is_err());
        assert!(!path.exists(), "rejected scale must not create a file");
    }

    #[test]
    fn sparkles_are_deterministic() {
        for row in 0..16 {
            for col in 0..16 {
                assert_eq!(is_sparkle(7, row, col), is_sparkle(7, row, col));
            }
        }
    }
}
