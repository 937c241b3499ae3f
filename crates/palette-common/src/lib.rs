//! Common types shared across the palette swatch crates.

pub mod color;
pub mod error;
pub mod palette;

pub use color::Color;
pub use error::{PaletteError, PaletteResult};
pub use palette::{Palette, PaletteTable};
