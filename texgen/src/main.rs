// One-shot generator for equirectangular planet textures.
// Produces an RGBA PNG where R/G/B carry independent octave-noise fields
// and the fourth channel is either synthesized noise or an external
// grayscale image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use texture::{TextureParams, generate_from_seed, save_channel_previews};

#[derive(Parser)]
#[command(name = "texgen")]
#[command(about = "Generate a seamless sphere texture from seeded gradient noise")]
struct Cli {
    /// Seed for the noise generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Texture height (latitude) in pixels
    #[arg(long, default_value_t = 432)]
    height: u32,

    /// Texture width (longitude) in pixels; defaults to 2×height
    #[arg(long)]
    width: Option<u32>,

    /// Grayscale image for the fourth channel instead of noise
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "sphere_texture.png")]
    output: PathBuf,

    /// Also write one inspection image per channel
    #[arg(long)]
    previews: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let width = cli.width.unwrap_or(2 * cli.height);

    let params = TextureParams::default();
    let tex = generate_from_seed(cli.seed, &params, width, cli.height, cli.mask.as_deref());

    tex.save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    tracing::info!(
        "generated {}x{} sphere texture (seed {}) -> {}",
        width,
        cli.height,
        cli.seed,
        cli.output.display()
    );

    if cli.previews {
        let dir = cli
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."))
            .to_path_buf();
        save_channel_previews(&tex, &dir)
            .with_context(|| format!("failed to write previews in {}", dir.display()))?;
    }

    Ok(())
}
