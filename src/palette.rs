//! Palette system for icon color support
//!
//! This module provides symbolic color tokens that can be resolved to
//! concrete color values via palette files. This keeps the renderer free of
//! branding decisions: the same icon set can be regenerated with a different
//! color scheme by swapping the palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A palette mapping symbolic color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Color mappings: token name -> color value
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette - the extension brand purple with white glyphs
const DEFAULT_PALETTE: &str = r##"
[colors]
# Canvas background
canvas = "#5436DA"

# Label text and badge strokes
glyph = "white"
"##;

impl Palette {
    /// Load palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this palette for the token
    /// 2. Check the default palette for the token
    /// 3. Use the category default (canvas -> brand purple, anything
    ///    glyph-like -> white)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("canvas") {
            return "#5436DA".to_string();
        }

        // Unknown tokens draw in the glyph color
        "white".to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
