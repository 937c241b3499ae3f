//! Common test fixtures for palette rendering tests.

use palette_common::Palette;

/// Canvas sizes used across tests.
pub mod sizes {
    /// Default swatch size
    pub const DEFAULT: (u32, u32) = (800, 200);

    /// Width that divides evenly by 1, 2, 4, 5 and 8 bands
    pub const EVEN: (u32, u32) = (400, 100);

    /// Small canvas for fast pixel scans
    pub const SMALL: (u32, u32) = (120, 60);
}

/// Hex color lists for hand-picked scenarios.
pub mod colors {
    /// Two light bands followed by two dark bands
    pub const MINIMALIST: [&str; 4] = ["#FFFFFF", "#F0F0F0", "#333333", "#000000"];

    /// Three bands, leaves a 2 px strip on an 800 px canvas
    pub const DIGITAL_GLAMOUR: [&str; 3] = ["#D9D9D9", "#FFFFFF", "#FF69B4"];

    /// Channel means exactly 128 and just above it (129)
    pub const THRESHOLD: [&str; 2] = ["#808080", "#818181"];

    /// Saturated primaries
    pub const PRIMARIES: [&str; 3] = ["#FF0000", "#00FF00", "#0000FF"];
}

/// The `minimalist` palette.
pub fn minimalist() -> Palette {
    Palette::from_hex("minimalist", &colors::MINIMALIST).expect("fixture colors are valid")
}

/// The `digital_glamour` palette.
pub fn digital_glamour() -> Palette {
    Palette::from_hex("digital_glamour", &colors::DIGITAL_GLAMOUR).expect("fixture colors are valid")
}

/// A palette of `n` distinct gray levels, darkest first.
pub fn gray_ramp(n: usize) -> Palette {
    let colors: Vec<String> = (0..n)
        .map(|i| {
            let level = if n > 1 { i * 255 / (n - 1) } else { 0 };
            format!("#{0:02X}{0:02X}{0:02X}", level)
        })
        .collect();
    Palette::from_hex(format!("gray_ramp_{}", n), &colors).expect("generated colors are valid")
}
