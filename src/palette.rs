//! The configurable color and highlight palette.
//!
//! Commands address colors by index rather than by value, so the palette
//! is two fixed-size lists: plain text colors and highlight pairs. The
//! settings layer owns editing and persistence; the engine only resolves
//! indices into style fragments.

use serde::{Deserialize, Serialize};

/// Number of palette slots for both colors and highlights.
pub const PALETTE_SIZE: usize = 5;

/// A highlight slot: text color plus background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPair {
    /// Text color over the highlight.
    pub foreground: String,
    /// Highlight background color (without alpha suffix).
    pub background: String,
}

impl HighlightPair {
    fn new(foreground: &str, background: &str) -> Self {
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }
}

/// The configured palette: [`PALETTE_SIZE`] plain colors and
/// [`PALETTE_SIZE`] highlight pairs, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Plain text colors.
    pub colors: [String; PALETTE_SIZE],
    /// Highlight (text, background) pairs.
    pub highlights: [HighlightPair; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                "#FF0A0A".to_string(),
                "#00C800".to_string(),
                "#DD7700".to_string(),
                "#FFFF00".to_string(),
                "#00FFFF".to_string(),
            ],
            highlights: [
                HighlightPair::new("#000000", "#FFFF00"),
                HighlightPair::new("#000000", "#00FF00"),
                HighlightPair::new("#FFFFFF", "#FF0000"),
                HighlightPair::new("#000000", "#00FFFF"),
                HighlightPair::new("#FFFFFF", "#FF00FF"),
            ],
        }
    }
}

impl Palette {
    /// Plain color at `index`. Panics if `index >= PALETTE_SIZE`; indices
    /// come from a fixed-size menu, so out of range is a caller bug.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index]
    }

    /// Highlight pair at `index`. Same precondition as [`Palette::color`].
    pub fn highlight(&self, index: usize) -> &HighlightPair {
        &self.highlights[index]
    }
}
