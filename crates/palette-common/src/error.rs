//! Error types for palette rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using PaletteError.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Primary error type for palette operations.
#[derive(Debug, Error)]
pub enum PaletteError {
    // === Input Errors ===
    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("Palette '{0}' has no colors")]
    EmptyPalette(String),

    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    #[error("Invalid canvas {width}x{height}: {reason}")]
    InvalidCanvas {
        width: u32,
        height: u32,
        reason: String,
    },

    // === Output Errors ===
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PaletteError {
    /// Short, stable name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PaletteError::InvalidColorFormat(_) => "InvalidColorFormat",
            PaletteError::EmptyPalette(_) => "EmptyPalette",
            PaletteError::PaletteNotFound(_) => "PaletteNotFound",
            PaletteError::InvalidCanvas { .. } => "InvalidCanvas",
            PaletteError::Encode(_) => "Encode",
            PaletteError::Io { .. } => "Io",
        }
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PaletteError::Io {
            path: path.into(),
            source,
        }
    }
}
