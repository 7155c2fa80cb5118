use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchpadError, SketchpadResult};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Startup settings for the sketchpad.
///
/// Every field has a default, so a config file only needs to mention what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub title: String,
    /// Canvas width and height in points
    pub canvas_size: [f32; 2],
    /// Font size used when placing stickers
    pub sticker_size: f32,
    /// Initial sticker palette
    pub stickers: Vec<String>,
    /// RGB colour of marker strokes
    pub ink: [u8; 3],
    /// RGB colour the canvas is cleared to
    pub background: [u8; 3],
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            title: "Sticker Sketchpad".to_owned(),
            canvas_size: [256.0, 256.0],
            sticker_size: 32.0,
            stickers: vec!["🐱".to_owned(), "🌮".to_owned(), "⭐".to_owned()],
            ink: [0, 0, 0],
            background: [255, 255, 255],
        }
    }
}

impl SketchpadConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> SketchpadResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> SketchpadResult<Self> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or fall back to defaults when
    /// the variable is unset.
    pub fn from_env() -> SketchpadResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                log::debug!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> SketchpadResult<()> {
        let [width, height] = self.canvas_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SketchpadError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        if !(self.sticker_size.is_finite() && self.sticker_size > 0.0) {
            return Err(SketchpadError::InvalidConfig(format!(
                "sticker size must be positive, got {}",
                self.sticker_size
            )));
        }
        if self.stickers.iter().all(|glyph| glyph.trim().is_empty()) {
            return Err(SketchpadError::InvalidConfig(
                "sticker palette is empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b] = self.ink;
        Color32::from_rgb(r, g, b)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
