//! Built-in 5x7 bitmap font for swatch labels.
//!
//! Covers what color codes and palette names need: digits, Latin letters
//! (lowercase is drawn as uppercase), `#`, `-`, `_` and space. Characters
//! without a glyph advance the pen but draw nothing.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Glyph cell width in font pixels
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;
/// Gap between glyphs in font pixels
pub const GLYPH_SPACING: u32 = 1;
/// Default font pixel size in canvas pixels (10x14 glyphs)
pub const DEFAULT_SCALE: u32 = 2;

/// One row per entry, top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const HASH: Glyph = [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A];
const DASH: Glyph = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];
const UNDERSCORE: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F];
const SPACE: Glyph = [0x00; GLYPH_HEIGHT as usize];

/// Look up the glyph for `ch`, if the font has one.
fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0'..='9' => Some(&DIGITS[ch as usize - '0' as usize]),
        'A'..='Z' => Some(&LETTERS[ch as usize - 'A' as usize]),
        'a'..='z' => Some(&LETTERS[ch as usize - 'a' as usize]),
        '#' => Some(&HASH),
        '-' => Some(&DASH),
        '_' => Some(&UNDERSCORE),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Whether the font can draw `ch`.
pub fn has_glyph(ch: char) -> bool {
    glyph(ch).is_some()
}

/// Pen advance per character at `scale`.
pub fn advance(scale: u32) -> u32 {
    (GLYPH_WIDTH + GLYPH_SPACING) * scale.max(1)
}

/// Width in canvas pixels covered by `text` at `scale` (no trailing gap).
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * advance(scale) - GLYPH_SPACING * scale.max(1)
}

/// Height in canvas pixels of a line of text at `scale`.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale.max(1)
}

/// Draw `text` with its top-left corner at `origin`, clipped to the canvas.
pub fn draw_text_mut(canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>, scale: u32) {
    let scale = scale.max(1);
    let (mut pen_x, top) = origin;

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(canvas, (pen_x, top), rows, color, scale);
        }
        pen_x += advance(scale) as i32;
    }
}

fn draw_glyph(canvas: &mut RgbImage, origin: (i32, i32), rows: &Glyph, color: Rgb<u8>, scale: u32) {
    let (x0, y0) = origin;
    let step = scale as i32;

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let x = x0 + col as i32 * step;
            let y = y0 + row as i32 * step;
            // draw_filled_rect_mut clips to the canvas bounds
            draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(scale, scale), color);
        }
    }
}
