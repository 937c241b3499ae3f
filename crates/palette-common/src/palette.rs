//! Named palettes and the built-in palette table.

use crate::color::Color;
use crate::error::{PaletteError, PaletteResult};

/// Built-in palettes as `(name, colors)` in definition order.
pub const BUILTIN_PALETTES: &[(&str, &[&str])] = &[
    ("nature_embrace", &["#2C4A3E", "#E6D5C3", "#C35A38", "#462521"]),
    ("digital_glamour", &["#D9D9D9", "#FFFFFF", "#FF69B4"]),
    ("serene_escape", &["#89CFF0", "#DEA5A4", "#E6E6FA"]),
    ("mocha_mousse", &["#9E7967", "#EDE3D9", "#1C2915", "#CCD5C4"]),
    ("vintage_modern", &["#1B365D", "#7B3F00", "#F5F5DC", "#2F4F4F"]),
    ("minimalist", &["#FFFFFF", "#F0F0F0", "#333333", "#000000"]),
    ("ocean_dreams", &["#003366", "#B2D8D8", "#FF7F50", "#FFF5EE"]),
    ("urban_jungle", &["#808080", "#228B22", "#D35400", "#F8F8FF"]),
    ("tech_future", &["#1A1A1A", "#8A2BE2", "#00FFFF", "#F8F8FF"]),
    ("warm_sunset", &["#FFA07A", "#483D8B", "#FFB6C1", "#87CEEB"]),
];

/// A named, ordered list of colors. Order is left-to-right band order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Build a palette from `#RRGGBB` strings, failing on the first malformed one.
    pub fn from_hex<S: AsRef<str>>(name: impl Into<String>, colors: &[S]) -> PaletteResult<Self> {
        let colors = colors
            .iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<PaletteResult<Vec<_>>>()?;
        Ok(Self::new(name, colors))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Output file name for this palette (`<name>.png`).
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Ordered collection of palettes.
#[derive(Debug, Clone, Default)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

impl PaletteTable {
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// Build a table from `(name, colors)` entries.
    pub fn from_entries(entries: &[(&str, &[&str])]) -> PaletteResult<Self> {
        let palettes = entries
            .iter()
            .map(|(name, colors)| Palette::from_hex(*name, *colors))
            .collect::<PaletteResult<Vec<_>>>()?;
        Ok(Self::new(palettes))
    }

    /// The compiled-in palette table.
    pub fn builtin() -> PaletteResult<Self> {
        Self::from_entries(BUILTIN_PALETTES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// All palettes in table order, or just the named one.
    pub fn select(&self, name: Option<&str>) -> PaletteResult<Vec<&Palette>> {
        match name {
            None => Ok(self.palettes.iter().collect()),
            Some(name) => self
                .get(name)
                .map(|p| vec![p])
                .ok_or_else(|| PaletteError::PaletteNotFound(name.to_string())),
        }
    }
}

impl<'a> IntoIterator for &'a PaletteTable {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.palettes.iter()
    }
}
