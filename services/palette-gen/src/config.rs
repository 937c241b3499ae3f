//! Generator configuration.
//!
//! Turns parsed command-line arguments into the renderer's batch settings.

use std::path::PathBuf;

use palette_renderer::{BatchConfig, CanvasSize};
use tracing::Level;

/// Runtime settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving the PNG files
    pub output_dir: PathBuf,

    /// Canvas size for every swatch
    pub size: CanvasSize,

    /// Render only this palette (default: all)
    pub palette: Option<String>,
}

impl GeneratorConfig {
    /// Batch settings for the renderer.
    pub fn batch(&self) -> BatchConfig {
        BatchConfig::new(&self.output_dir).with_size(self.size)
    }
}

/// Parse a log level name, falling back to INFO for anything unrecognized.
pub fn parse_log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
