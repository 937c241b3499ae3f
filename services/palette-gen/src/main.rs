//! Palette swatch generator.
//!
//! Renders each built-in color palette as a row of labelled color bands and
//! writes one PNG per palette to the output directory.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use palette_common::PaletteTable;
use palette_renderer::{render_all_and_save, CanvasSize};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use config::{parse_log_level, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "palette-gen")]
#[command(about = "Render the built-in color palettes to PNG swatches")]
struct Args {
    /// Directory for generated PNG files
    #[arg(long, env = "PALETTE_OUTPUT_DIR", default_value = "color_palettes")]
    output_dir: PathBuf,

    /// Canvas width in pixels
    #[arg(long, env = "PALETTE_WIDTH", default_value = "800", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, env = "PALETTE_HEIGHT", default_value = "200", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Specific palette to render (default: all)
    #[arg(short, long)]
    palette: Option<String>,

    /// List the built-in palette names and exit
    #[arg(long)]
    list: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<&Args> for GeneratorConfig {
    fn from(args: &Args) -> Self {
        Self {
            output_dir: args.output_dir.clone(),
            size: CanvasSize::new(args.width, args.height),
            palette: args.palette.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the "Generated" lines
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(&args.log_level))
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let table = PaletteTable::builtin().context("Built-in palette table is invalid")?;

    if args.list {
        for name in table.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = GeneratorConfig::from(&args);
    info!(
        output_dir = %config.output_dir.display(),
        width = config.size.width,
        height = config.size.height,
        palette = ?config.palette,
        "Starting palette generation"
    );

    let palettes = table.select(config.palette.as_deref())?;

    match render_all_and_save(palettes, &config.batch()) {
        Ok(written) => {
            info!(count = written.len(), "Palette generation complete");
            Ok(())
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "Palette generation failed");
            Err(e).with_context(|| {
                format!("Failed to generate palettes in {}", config.output_dir.display())
            })
        }
    }
}
