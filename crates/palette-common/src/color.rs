//! Validated `#RRGGBB` color values.

use std::fmt;
use std::str::FromStr;

use crate::error::{PaletteError, PaletteResult};

/// An opaque 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. The leading `#` is required; hex digits may
    /// be either case.
    pub fn from_hex(s: &str) -> PaletteResult<Self> {
        let invalid = || PaletteError::InvalidColorFormat(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        // Checking the digits first keeps the byte slicing below on char boundaries.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sum of the three channel values (0..=765).
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Arithmetic mean of the three channel values.
    pub fn mean(&self) -> f64 {
        self.channel_sum() as f64 / 3.0
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upper_and_lower_case() {
        let upper = Color::from_hex("#2C4A3E").unwrap();
        let lower = Color::from_hex("#2c4a3e").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, Color::rgb(0x2C, 0x4A, 0x3E));
    }

    #[test]
    fn test_multibyte_input_is_rejected_not_panicking() {
        // Six bytes long, but not six hex digits.
        assert!(Color::from_hex("#ééé").is_err());
    }
}
