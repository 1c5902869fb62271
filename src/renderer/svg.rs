//! SVG generation for icon variants

use crate::icon::IconSpec;
use crate::palette::Palette;

use super::SvgConfig;

/// Centered label drawn on every icon
const LABEL: &str = "RL4";

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    size: u32,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder for a square canvas
    pub fn new(size: u32, config: SvgConfig) -> Self {
        Self {
            config,
            size,
            elements: vec![],
        }
    }

    /// Add a rectangle filling the whole canvas
    pub fn add_background(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"<rect width="{0}" height="{0}" fill="{1}"/>"#,
            self.size, fill
        ));
    }

    /// Add the centered label text
    ///
    /// Centering uses percentage coordinates with anchor/baseline attributes
    /// so the text stays centered at every canvas size.
    pub fn add_label(&mut self, text: &str, font_size: u32, fill: &str) {
        self.elements.push(format!(
            r#"<text x="50%" y="50%" font-family="{}" font-size="{}" font-weight="bold" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            self.config.font_family,
            font_size,
            fill,
            escape_xml(text)
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: u32, y: u32, w: u32, h: u32, styles: &str) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            x, y, w, h, styles
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, styles: &str) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            x1, y1, x2, y2, styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: u32, cy: u32, r: u32, styles: &str) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            cx, cy, r, styles
        ));
    }

    /// Add a polygon element
    pub fn add_polygon(&mut self, points: &[(u32, u32)], styles: &str) {
        let points_str: String = points
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements
            .push(format!(r#"<polygon points="{}"{}/>"#, points_str, styles));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        svg.push_str(&format!(
            r#"<svg width="{0}" height="{0}" xmlns="http://www.w3.org/2000/svg">"#,
            self.size
        ));
        svg.push('\n');

        for elem in &self.elements {
            svg.push_str("  ");
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render an icon variant to an SVG string (default config and palette)
pub fn render_icon(spec: &IconSpec) -> String {
    render_icon_with(spec, &SvgConfig::default(), &Palette::default())
}

/// Render an icon variant to an SVG string with a custom config and palette
pub fn render_icon_with(spec: &IconSpec, config: &SvgConfig, palette: &Palette) -> String {
    let canvas = palette.resolve_or_default("canvas");
    let glyph = palette.resolve_or_default("glyph");

    let mut builder = SvgBuilder::new(spec.size, config.clone());

    builder.add_background(&canvas);
    builder.add_label(LABEL, spec.size / 2, &glyph);

    if spec.draws_badge() {
        render_badge(&mut builder, spec.size, &glyph);
    }

    builder.build()
}

/// Render the snapshot badge into the bottom-right corner
///
/// A page outline with three ruled lines, topped by a lens circle and a
/// shutter triangle. All offsets are measured from the far canvas edge, so
/// the badge hugs the corner at any size past the threshold.
fn render_badge(builder: &mut SvgBuilder, size: u32, stroke: &str) {
    builder.add_rect(size - 40, size - 40, 32, 32, &outline_styles(stroke, 2));

    for dy in [30, 24, 18] {
        builder.add_line(
            size - 36,
            size - dy,
            size - 8,
            size - dy,
            &stroke_styles(stroke, 1),
        );
    }

    builder.add_circle(size - 24, size - 52, 8, &outline_styles(stroke, 2));

    builder.add_polygon(
        &[
            (size - 24, size - 60),
            (size - 28, size - 56),
            (size - 20, size - 56),
        ],
        &fill_styles(stroke),
    );
}

/// Format unfilled outline styles as an SVG attribute string
fn outline_styles(stroke: &str, width: u32) -> String {
    format!(r#" fill="none" stroke="{}" stroke-width="{}""#, stroke, width)
}

/// Format stroke-only styles as an SVG attribute string
fn stroke_styles(stroke: &str, width: u32) -> String {
    format!(r#" stroke="{}" stroke-width="{}""#, stroke, width)
}

/// Format fill styles as an SVG attribute string
fn fill_styles(fill: &str) -> String {
    format!(r#" fill="{}""#, fill)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_style_helpers() {
        assert_eq!(
            outline_styles("white", 2),
            r#" fill="none" stroke="white" stroke-width="2""#
        );
        assert_eq!(
            stroke_styles("white", 1),
            r#" stroke="white" stroke-width="1""#
        );
        assert_eq!(fill_styles("white"), r#" fill="white""#);
    }

    #[test]
    fn test_builder_envelope() {
        let builder = SvgBuilder::new(48, SvgConfig::default());
        let svg = builder.build();
        assert!(svg.starts_with(r#"<svg width="48" height="48""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_builder_standalone_declaration() {
        let config = SvgConfig::new().with_standalone(true);
        let svg = SvgBuilder::new(16, config).build();
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_background_fills_canvas() {
        let mut builder = SvgBuilder::new(16, SvgConfig::default());
        builder.add_background("#5436DA");
        let svg = builder.build();
        assert!(svg.contains(r##"<rect width="16" height="16" fill="#5436DA"/>"##));
    }

    #[test]
    fn test_label_markup() {
        let mut builder = SvgBuilder::new(48, SvgConfig::default());
        builder.add_label("RL4", 24, "white");
        let svg = builder.build();
        assert!(svg.contains(r#"x="50%" y="50%""#));
        assert!(svg.contains(r#"font-size="24""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"text-anchor="middle" dominant-baseline="central""#));
        assert!(svg.contains(">RL4</text>"));
    }

    #[test]
    fn test_badge_geometry_at_128() {
        let svg = render_icon(&IconSpec::with_badge(128));

        // Page outline anchored 40px in from the corner
        assert!(svg.contains(r#"<rect x="88" y="88" width="32" height="32" fill="none""#));
        // Ruled lines span size-36 .. size-8
        assert!(svg.contains(r#"<line x1="92" y1="98" x2="120" y2="98""#));
        assert!(svg.contains(r#"<line x1="92" y1="104" x2="120" y2="104""#));
        assert!(svg.contains(r#"<line x1="92" y1="110" x2="120" y2="110""#));
        // Lens and shutter above the page
        assert!(svg.contains(r#"<circle cx="104" cy="76" r="8" fill="none""#));
        assert!(svg.contains(r#"<polygon points="104,68 100,72 108,72" fill="white"/>"#));
    }

    #[test]
    fn test_badge_tracks_canvas_edge() {
        let svg = render_icon(&IconSpec::with_badge(200));
        assert!(svg.contains(r#"<rect x="160" y="160" width="32" height="32""#));
        assert!(svg.contains(r#"<circle cx="176" cy="148" r="8""#));
    }

    #[test]
    fn test_palette_colors_flow_through() {
        let palette = Palette::from_str(
            r##"
[colors]
canvas = "#000000"
glyph = "#00ff00"
"##,
        )
        .unwrap();
        let svg = render_icon_with(&IconSpec::with_badge(128), &SvgConfig::default(), &palette);
        assert!(svg.contains(r##"fill="#000000""##));
        assert!(svg.contains(r##"stroke="#00ff00""##));
        assert!(!svg.contains(r#"stroke="white""#));
    }
}
