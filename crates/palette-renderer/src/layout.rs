//! Band layout and label contrast for palette swatches.

use std::ops::Range;

use palette_common::{Color, PaletteError, PaletteResult};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;

/// Horizontal label inset from a band's left edge.
pub const LABEL_INSET_X: u32 = 10;
/// Distance from the canvas bottom edge to the top of the label.
pub const LABEL_OFFSET_BOTTOM: u32 = 30;

/// Channel-sum threshold for black labels: mean > 128 <=> sum > 384.
const BLACK_LABEL_SUM_THRESHOLD: u16 = 3 * 128;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Partition of the canvas width into equal bands.
///
/// Band width is `width / count` (integer division). Any remainder is left
/// as an unfilled strip at the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    size: CanvasSize,
    count: u32,
    band_width: u32,
}

impl BandLayout {
    /// Compute the layout for `count` bands on a canvas of `size`.
    ///
    /// Fails for an empty canvas, for zero bands, and when the canvas is too
    /// narrow to give every band at least one column.
    pub fn new(size: CanvasSize, count: usize) -> PaletteResult<Self> {
        let invalid = |reason: String| PaletteError::InvalidCanvas {
            width: size.width,
            height: size.height,
            reason,
        };

        if size.width == 0 || size.height == 0 {
            return Err(invalid("canvas has no pixels".to_string()));
        }
        let count = u32::try_from(count).map_err(|_| invalid(format!("too many bands ({})", count)))?;
        if count == 0 {
            return Err(invalid("no bands to lay out".to_string()));
        }

        let band_width = size.width / count;
        if band_width == 0 {
            return Err(invalid(format!(
                "width {} cannot hold {} bands",
                size.width, count
            )));
        }

        Ok(Self {
            size,
            count,
            band_width,
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn band_width(&self) -> u32 {
        self.band_width
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Horizontal pixel range `[i * band_width, (i + 1) * band_width)` of band `i`.
    pub fn band(&self, index: usize) -> Range<u32> {
        let start = index as u32 * self.band_width;
        start..start + self.band_width
    }

    /// All band ranges, left to right.
    pub fn bands(&self) -> impl Iterator<Item = Range<u32>> + '_ {
        (0..self.count()).map(move |i| self.band(i))
    }

    /// The strip right of the last band that no band covers. Empty when the
    /// width divides evenly.
    pub fn unfilled(&self) -> Range<u32> {
        self.band_width * self.count..self.size.width
    }

    /// Top-left corner of band `index`'s label.
    ///
    /// `y` is negative on canvases shorter than the bottom offset; drawing clips.
    pub fn label_origin(&self, index: usize) -> (i32, i32) {
        let x = self.band(index).start + LABEL_INSET_X;
        let y = self.size.height as i64 - LABEL_OFFSET_BOTTOM as i64;
        (x as i32, y as i32)
    }
}

/// Label color picked for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Black,
    White,
}

impl LabelColor {
    pub fn to_color(self) -> Color {
        match self {
            LabelColor::Black => Color::BLACK,
            LabelColor::White => Color::WHITE,
        }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb(self.to_color().channels())
    }
}

/// Pick a readable label color for text drawn over `background`.
///
/// Black when the mean of the three channels is strictly above 128, white
/// otherwise. Not a perceptual contrast model.
pub fn label_color(background: &Color) -> LabelColor {
    if background.channel_sum() > BLACK_LABEL_SUM_THRESHOLD {
        LabelColor::Black
    } else {
        LabelColor::White
    }
}
