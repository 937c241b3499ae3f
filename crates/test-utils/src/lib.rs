//! Shared test utilities for the palette swatch workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Scratch output directories
//! - Canvas probes (pixel colors, region color sets)
//! - Common palette fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_pixel, fixtures, region_colors};
//! ```

pub mod fixtures;
pub mod paths;
pub mod probes;

// Re-export commonly used items at the crate root
pub use paths::*;
pub use probes::*;

/// Assert that the pixel at `(x, y)` of an `RgbImage` has the given `[r, g, b]`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_pixel;
///
/// assert_pixel!(img, 0, 0, [255, 255, 255]);
/// ```
#[macro_export]
macro_rules! assert_pixel {
    ($img:expr, $x:expr, $y:expr, $rgb:expr) => {{
        let (x, y): (u32, u32) = ($x, $y);
        let actual: [u8; 3] = $img.get_pixel(x, y).0;
        let expected: [u8; 3] = $rgb;
        if actual != expected {
            panic!(
                "assertion failed: pixel ({}, {})\n  actual: `{:?}`,\n expected: `{:?}`",
                x, y, actual, expected
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    #[test]
    fn test_assert_pixel_passes() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert_pixel!(img, 1, 1, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_pixel_fails() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        assert_pixel!(img, 0, 0, [0, 0, 0]);
    }
}
