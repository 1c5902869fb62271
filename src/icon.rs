//! Icon variant descriptions
//!
//! An [`IconSpec`] names one icon to produce: the square canvas size in
//! pixels and whether the snapshot badge should be drawn. Specs are plain
//! copy values; the driver builds one per output file and the renderer
//! consumes it immediately.

/// Minimum canvas size at which the snapshot badge is drawn.
///
/// Below this the badge geometry would collide with the centered label, so
/// smaller icons suppress it regardless of the requested flag.
pub const BADGE_MIN_SIZE: u32 = 128;

/// One icon variant: canvas size and badge flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Width and height of the square canvas in pixels.
    pub size: u32,
    /// Whether to draw the snapshot badge (honored only at
    /// [`BADGE_MIN_SIZE`] and up).
    pub badge: bool,
}

impl IconSpec {
    /// Create a spec without the badge
    pub const fn new(size: u32) -> Self {
        Self { size, badge: false }
    }

    /// Create a spec with the badge requested
    pub const fn with_badge(size: u32) -> Self {
        Self { size, badge: true }
    }

    /// Whether the badge will actually be rendered for this spec
    pub fn draws_badge(&self) -> bool {
        self.badge && self.size >= BADGE_MIN_SIZE
    }

    /// Conventional output file name, `icon<size>.svg`
    pub fn file_name(&self) -> String {
        format!("icon{}.svg", self.size)
    }

    /// The built-in extension icon set: 16, 48, and 128 px, with the badge
    /// only on the largest.
    pub const fn default_set() -> [IconSpec; 3] {
        [
            IconSpec::new(16),
            IconSpec::new(48),
            IconSpec::with_badge(128),
        ]
    }
}
