//! Configuration for SVG icon output

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration before the root element
    pub standalone: bool,

    /// Font family for the centered label
    pub font_family: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            // Icon files are consumed by the extension manifest and start
            // directly at <svg>.
            standalone: false,
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the label font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }
}
