//! Palette swatch rendering.
//!
//! Draws a palette as equal-width vertical bands, each labelled with its
//! color code, and writes the result as PNG:
//! - Band layout and label contrast (`layout`)
//! - Built-in bitmap font (`glyphs`)
//! - Swatch canvas rendering (`swatch`)
//! - Deterministic PNG encoding (`png`)
//! - Render-and-save over a palette table (`batch`)

pub mod batch;
pub mod glyphs;
pub mod layout;
pub mod png;
pub mod swatch;

pub use batch::{render_all_and_save, BatchConfig};
pub use layout::{label_color, BandLayout, CanvasSize, LabelColor};
pub use swatch::render_palette;
