use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bead_palette::{ColorSpace, RedMean};
use beadify::models::RenderConfig;
use beadify::rendering::GridRenderer;
use beadify::services::{load_palette, output_path, BeadConverter};

#[derive(Parser)]
#[command(name = "beadify")]
#[command(about = "Turn pixel art into labelled craft-bead patterns")]
struct Cli {
    /// Source PNG image
    image: PathBuf,

    /// Palette file with a [Palette] section of `name = r,g,b` entries.
    /// Without a palette the image is only upscaled.
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Color space for matching: rgb, yuv or hsv
    #[arg(short, long, default_value = "rgb")]
    color: String,

    /// Red-mean weighting for the rgb metric: legacy or average
    #[arg(long, default_value = "legacy")]
    red_mean: RedMean,

    /// Output PNG file path (default: <image>_<bead|big>_<color>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render configuration YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cell size in pixels (overrides the configuration file)
    #[arg(long)]
    cell_size: Option<u32>,

    /// Additional font file for labels (repeatable)
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Re-compress the output with oxipng
    #[arg(long)]
    optimize: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Reject an unknown color space before touching any file
    let space = cli
        .color
        .parse::<ColorSpace>()?
        .with_red_mean(cli.red_mean);

    let mut config = RenderConfig::load(cli.config.as_deref())?;
    if let Some(cell_size) = cli.cell_size {
        config.cell_size = cell_size;
    }
    if cli.optimize {
        config.optimize = true;
    }

    let palette = cli
        .palette
        .as_deref()
        .map(|path| {
            load_palette(path)
                .with_context(|| format!("Failed to load palette {}", path.display()))
        })
        .transpose()?;

    let renderer = GridRenderer::with_font_files(&cli.fonts).context("Failed to load fonts")?;
    let converter = BeadConverter::new(palette, space, config, renderer)?;

    let output = cli
        .output
        .unwrap_or_else(|| output_path(&cli.image, converter.has_palette(), converter.space()));

    let report = converter
        .convert_file(&cli.image, &output)
        .with_context(|| format!("Failed to convert {}", cli.image.display()))?;

    println!("Rendered {} ({} bytes)", report.output.display(), report.bytes);
    for (name, count) in &report.bead_counts {
        println!("  {name}: {count}");
    }

    Ok(())
}
