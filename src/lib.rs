//! Icon Stencil - placeholder SVG icon generation for extension assets
//!
//! This library renders a fixed family of square placeholder icons: a brand
//! purple canvas with a centered bold "RL4" label, and a decorative snapshot
//! badge on the largest variant. Output is plain SVG text, ready to be
//! rasterized by whatever toolchain ships the assets.
//!
//! # Example
//!
//! ```rust
//! use icon_stencil::{render_icon, IconSpec};
//!
//! let svg = render_icon(&IconSpec::with_badge(128));
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("RL4"));
//! ```

pub mod error;
pub mod icon;
pub mod palette;
pub mod renderer;

pub use error::GenerateError;
pub use icon::{IconSpec, BADGE_MIN_SIZE};
pub use palette::{Palette, PaletteError};
pub use renderer::{render_icon, render_icon_with, SvgConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a full generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette for color resolution
    pub palette: Palette,
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the palette for color resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Render each icon variant and write it to `out_dir` under its
/// conventional name (`icon<size>.svg`)
///
/// Returns the paths written, in input order. Fails on the first write
/// error; files already written are left in place, since a re-run
/// regenerates them identically.
pub fn write_icons(
    out_dir: &Path,
    specs: &[IconSpec],
    config: &GenerateConfig,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut written = Vec::with_capacity(specs.len());

    for spec in specs {
        let svg = render_icon_with(spec, &config.svg, &config.palette);
        let path = out_dir.join(spec.file_name());
        fs::write(&path, &svg).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}

/// Write the built-in icon set (16, 48, 128 px) to `out_dir` with the
/// default configuration
///
/// # Example
///
/// ```no_run
/// use icon_stencil::write_default_set;
///
/// let written = write_default_set(std::path::Path::new("assets")).unwrap();
/// assert_eq!(written.len(), 3);
/// ```
pub fn write_default_set(out_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    write_icons(out_dir, &IconSpec::default_set(), &GenerateConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_smallest_variant() {
        let svg = render_icon(&IconSpec::new(16));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("RL4"));
    }

    #[test]
    fn test_render_badge_variant() {
        let svg = render_icon(&IconSpec::with_badge(128));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_config_builder() {
        let config = GenerateConfig::new()
            .with_svg(SvgConfig::new().with_standalone(true))
            .with_palette(Palette::default());

        assert!(config.svg.standalone);
        assert_eq!(config.palette.resolve("canvas"), Some("#5436DA"));
    }
}
