//! Fixed chart palettes

use serde::Serialize;

/// A named theme color with a concrete hex value for standalone output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// Theme token (`primary`, `secondary`, ...)
    pub name: &'static str,
    /// CSS hex color
    pub hex: &'static str,
}

impl Color {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }
}

/// Theme primary
pub const PRIMARY: Color = Color::new("primary", "#570df8");
/// Theme secondary
pub const SECONDARY: Color = Color::new("secondary", "#f000b8");
/// Theme accent
pub const ACCENT: Color = Color::new("accent", "#37cdbe");
/// Theme neutral
pub const NEUTRAL: Color = Color::new("neutral", "#3d4451");
/// Theme info
pub const INFO: Color = Color::new("info", "#3abff8");
/// Theme success
pub const SUCCESS: Color = Color::new("success", "#36d399");
/// Theme warning
pub const WARNING: Color = Color::new("warning", "#fbbd23");

/// Ordered list of colors assigned to categories by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [Color]);

impl Palette {
    /// Event type pie colors
    pub const EVENT_TYPES: Self = Self(&[PRIMARY, SECONDARY, ACCENT, INFO, SUCCESS, WARNING]);
    /// Visit type pie colors
    pub const VISIT_TYPES: Self = Self(&[PRIMARY, SECONDARY, ACCENT, NEUTRAL, INFO]);
    /// Scholar category pie colors
    pub const SCHOLAR_CATEGORIES: Self = Self(&[PRIMARY, SECONDARY, ACCENT, INFO, SUCCESS]);

    /// Color for the category at `index`, wrapping past the end.
    ///
    /// # Panics
    /// Never for the built-in palettes, which are non-empty.
    #[must_use]
    pub const fn color_for(self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    /// Number of distinct colors
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no colors
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}
