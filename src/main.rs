// Pixelmint - Deterministic Rarity & Pixel-Art Mint Engine
// Licensed under MIT License

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use pixelmint::render::save_artifact_png;
use pixelmint::MintArtifact;

const USAGE: &str = "\
Usage: pixelmint <identifier> [options]
       pixelmint --random [options]

Derives a rarity tier and pixel-art artifact from an identifier (a numeric
ID or a 0x-prefixed wallet address) and writes <stem>.png (with embedded
artifact metadata) plus <stem>.json next to it.

Options:
  --random        Roll a fresh seed instead of hashing an identifier
  --out DIR       Output directory (default: current directory)
  --scale N       Pixels per pattern cell, 1 to 256 (default: 16)
  --name NAME     Collection name used in metadata (default: Pixelmint)
  -h, --help      Show this help
";

struct CliOptions {
    identifier: Option<String>,
    random: bool,
    out: PathBuf,
    scale: u32,
    name: String,
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions {
        identifier: None,
        random: false,
        out: PathBuf::from("."),
        scale: 16,
        name: "Pixelmint".to_string(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{}", USAGE);
                std::process::exit(0);
            }
            "--random" => opts.random = true,
            "--out" => {
                let dir = args.next().context("--out requires a directory")?;
                opts.out = PathBuf::from(dir);
            }
            "--scale" => {
                let n = args.next().context("--scale requires a number")?;
                opts.scale = n.parse().with_context(|| format!("invalid scale '{n}'"))?;
            }
            "--name" => {
                opts.name = args.next().context("--name requires a value")?;
            }
            other if other.starts_with('-') => {
                anyhow::bail!("unknown option '{other}'\n\n{USAGE}");
            }
            other => {
                if opts.identifier.is_some() {
                    anyhow::bail!("more than one identifier given\n\n{USAGE}");
                }
                opts.identifier = Some(other.to_string());
            }
        }
    }

    if opts.identifier.is_none() && !opts.random {
        anyhow::bail!("an identifier or --random is required\n\n{USAGE}");
    }
    Ok(opts)
}

fn run() -> anyhow::Result<()> {
    let opts = parse_args()?;

    let artifact = match &opts.identifier {
        Some(id) => MintArtifact::from_identifier(id)?,
        None => MintArtifact::random(),
    };

    fs::create_dir_all(&opts.out)
        .with_context(|| format!("creating output directory {}", opts.out.display()))?;

    let stem = artifact.export_stem();
    let png_path = opts.out.join(format!("{stem}.png"));
    let json_path = opts.out.join(format!("{stem}.json"));

    save_artifact_png(&png_path, &artifact, opts.scale)?;

    let metadata = artifact.metadata(&opts.name);
    let json = serde_json::to_string_pretty(&metadata)?;
    fs::write(&json_path, json)?;

    let props = artifact.tier.properties();
    println!("Minted {} {}", opts.name, artifact.serial);
    println!("  seed:    {}", artifact.seed);
    println!(
        "  tier:    {} ({}%, glow {})",
        props.name, props.rate, props.glow_intensity
    );
    println!(
        "  pattern: {0}x{0}, {1} cells filled",
        artifact.pattern.side(),
        artifact.pattern.filled()
    );
    println!(
        "  colors:  {} / {}",
        artifact.palette.primary, artifact.palette.accent
    );
    println!("  fortune: {}", artifact.fortune);
    println!("  wrote:   {}", png_path.display());
    println!("  wrote:   {}", json_path.display());

    Ok(())
}

fn main() {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
