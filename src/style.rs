//! Style toggles and the inline style descriptor.

use crate::marker::CLOSE_MARKER;

/// Session-scoped bold/italic toggles.
///
/// Both flags start off and flip only through the toggle methods. The
/// state is an explicit value passed around rather than anything global,
/// so independent sessions (and tests) never interfere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    bold: bool,
    italic: bool,
}

impl StyleState {
    /// Create a state with both toggles off.
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
        }
    }

    /// Flip the bold toggle and return the new value.
    pub const fn toggle_bold(&mut self) -> bool {
        self.bold = !self.bold;
        self.bold
    }

    /// Flip the italic toggle and return the new value.
    pub const fn toggle_italic(&mut self) -> bool {
        self.italic = !self.italic;
        self.italic
    }

    /// Whether bold is active.
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// Whether italic is active.
    pub const fn is_italic(&self) -> bool {
        self.italic
    }
}

/// Declarative styling for one markup span.
///
/// Serialized into the open marker's style string with
/// [`StyleDescriptor::inline_style`]. Two descriptors are equivalent
/// exactly when their serialized style strings are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Foreground color, e.g. `#FF0A0A`.
    pub color: Option<String>,
    /// Background color, including any alpha suffix.
    pub background: Option<String>,
    /// Render bold.
    pub bold: bool,
    /// Render italic.
    pub italic: bool,
}

impl StyleDescriptor {
    /// The inline style string, fragments in fixed order:
    /// color, background, font-weight, font-style.
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some(color) = &self.color {
            style.push_str("color:");
            style.push_str(color);
            style.push(';');
        }
        if let Some(background) = &self.background {
            style.push_str("background:");
            style.push_str(background);
            style.push(';');
        }
        if self.bold {
            style.push_str("font-weight:bold;");
        }
        if self.italic {
            style.push_str("font-style:italic;");
        }
        style
    }

    /// The full open marker carrying this descriptor's style string.
    pub fn open_marker(&self) -> String {
        format!("<span style=\"{}\">", self.inline_style())
    }

    /// Wrap `text` in this descriptor's markers.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open_marker(), text, CLOSE_MARKER)
    }
}
