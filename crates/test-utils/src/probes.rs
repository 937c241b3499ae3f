//! Pixel probes for inspecting rendered canvases.

use std::collections::BTreeSet;
use std::ops::Range;

use image::RgbImage;
use palette_common::Color;

/// Color of the pixel at `(x, y)`.
pub fn pixel_color(img: &RgbImage, x: u32, y: u32) -> Color {
    let [r, g, b] = img.get_pixel(x, y).0;
    Color::rgb(r, g, b)
}

/// Distinct colors found in the `xs` by `ys` region.
pub fn region_colors(img: &RgbImage, xs: Range<u32>, ys: Range<u32>) -> BTreeSet<[u8; 3]> {
    let mut colors = BTreeSet::new();
    for y in ys {
        for x in xs.clone() {
            colors.insert(img.get_pixel(x, y).0);
        }
    }
    colors
}

/// Number of pixels in the region whose color equals `color`.
pub fn count_color(img: &RgbImage, xs: Range<u32>, ys: Range<u32>, color: Color) -> usize {
    let target = color.channels();
    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .filter(|&(x, y)| img.get_pixel(x, y).0 == target)
        .count()
}

/// Whether every pixel in column `x` has `color`.
pub fn column_is(img: &RgbImage, x: u32, color: Color) -> bool {
    (0..img.height()).all(|y| img.get_pixel(x, y).0 == color.channels())
}
