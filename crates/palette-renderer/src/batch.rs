//! Render every palette in a table and write one PNG per palette.

use std::fs;
use std::path::{Path, PathBuf};

use palette_common::{Palette, PaletteError, PaletteResult};
use tracing::{debug, info};

use crate::layout::CanvasSize;
use crate::png::encode_png;
use crate::swatch::render_palette;

/// Where and how large to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory receiving `<name>.png` files; created if missing
    pub output_dir: PathBuf,
    /// Canvas size for every palette
    pub size: CanvasSize,
}

impl BatchConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: CanvasSize::default(),
        }
    }

    pub fn with_size(mut self, size: CanvasSize) -> Self {
        self.size = size;
        self
    }

    /// Output path for `palette`.
    pub fn output_path(&self, palette: &Palette) -> PathBuf {
        self.output_dir.join(palette.file_name())
    }
}

/// Render and save each palette, printing `Generated <name>.png` per file.
///
/// Stops at the first failure; files written before it are kept.
pub fn render_all_and_save<'a, I>(palettes: I, config: &BatchConfig) -> PaletteResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a Palette>,
{
    render_all_and_save_with(palettes, config, |palette, _| {
        println!("Generated {}", palette.file_name());
    })
}

/// Like [`render_all_and_save`], calling `on_saved` after each write instead
/// of printing.
pub fn render_all_and_save_with<'a, I, F>(
    palettes: I,
    config: &BatchConfig,
    mut on_saved: F,
) -> PaletteResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a Palette>,
    F: FnMut(&Palette, &Path),
{
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| PaletteError::io(&config.output_dir, e))?;

    let mut written = Vec::new();
    for palette in palettes {
        let path = save_palette(palette, config)?;
        on_saved(palette, &path);
        written.push(path);
    }

    info!(
        count = written.len(),
        output_dir = %config.output_dir.display(),
        "Palette batch complete"
    );
    Ok(written)
}

/// Render one palette and write it to its output path.
///
/// The output directory must already exist.
pub fn save_palette(palette: &Palette, config: &BatchConfig) -> PaletteResult<PathBuf> {
    let img = render_palette(palette, config.size)?;
    let png = encode_png(&img)?;

    let path = config.output_path(palette);
    fs::write(&path, &png).map_err(|e| PaletteError::io(&path, e))?;

    debug!(bytes = png.len(), "Encoded swatch");
    info!(palette = %palette.name(), path = %path.display(), "Wrote palette swatch");
    Ok(path)
}
