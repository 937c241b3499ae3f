//! Swatch rendering: one labelled band per palette color.

use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use palette_common::{Color, Palette, PaletteError, PaletteResult};

use crate::glyphs::{self, DEFAULT_SCALE};
use crate::layout::{label_color, BandLayout, CanvasSize};

/// Canvas background, visible in the unfilled right-edge strip.
pub const BACKGROUND: Color = Color::WHITE;

/// Render `palette` as equal-width vertical bands on a white canvas.
///
/// Band `i` covers `[i * band_width, (i + 1) * band_width)` across the full
/// height and carries its color code in black or white, whichever
/// `label_color` picks for the band color.
///
/// # Arguments
/// * `palette` - Colors to draw, left to right
/// * `size` - Canvas size in pixels
///
/// # Returns
/// RGB image of exactly `size`
pub fn render_palette(palette: &Palette, size: CanvasSize) -> PaletteResult<RgbImage> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPalette(palette.name().to_string()));
    }
    let layout = BandLayout::new(size, palette.len())?;

    tracing::debug!(
        palette = %palette.name(),
        bands = layout.count(),
        band_width = layout.band_width(),
        unfilled = layout.unfilled().len(),
        "Rendering palette"
    );

    let mut img: RgbImage = ImageBuffer::from_pixel(size.width, size.height, to_rgb(&BACKGROUND));

    for (i, color) in palette.colors().iter().enumerate() {
        let band = layout.band(i);
        draw_filled_rect_mut(
            &mut img,
            Rect::at(band.start as i32, 0).of_size(layout.band_width(), size.height),
            to_rgb(color),
        );

        let label = color.to_string();
        glyphs::draw_text_mut(
            &mut img,
            layout.label_origin(i),
            &label,
            label_color(color).to_rgb(),
            DEFAULT_SCALE,
        );
    }

    Ok(img)
}

fn to_rgb(color: &Color) -> Rgb<u8> {
    Rgb(color.channels())
}
