//! SVG renderer for icon variants
//!
//! This module takes an IconSpec and produces a complete SVG document
//! string: background, centered label, and the optional snapshot badge.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_icon, render_icon_with};
