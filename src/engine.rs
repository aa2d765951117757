//! The markup engine: strip and apply inline span styling across one or
//! more selections.
//!
//! Every operation is a single synchronous pass over the current
//! selections. Multi-selection edits are processed in ascending document
//! order with live boundary re-fetching: each replacement shifts the
//! positions of everything after it, so the engine reads a selection's
//! bounds from the buffer again immediately before replacing it instead
//! of trusting offsets computed up front.

use tracing::debug;

use crate::buffer::{Position, Selection, TextBuffer};
use crate::marker::strip_markers;
use crate::palette::Palette;
use crate::style::{StyleDescriptor, StyleState};

/// Alpha suffix appended to highlight backgrounds.
const HIGHLIGHT_ALPHA: &str = "BB";

/// Result of a strip pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// At least one selection had markup removed.
    Stripped,
    /// No selection contained an open marker; nothing changed.
    NothingToStrip,
}

/// Result of an apply pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Every non-empty selection was wrapped.
    Applied,
    /// No text was selected; the buffer was not touched. The caller owns
    /// any user-facing notice.
    NoSelection,
}

impl ApplyOutcome {
    /// Whether the pass mutated the buffer.
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Strips and applies span markup against a [`TextBuffer`].
///
/// Owns the palette and the session's bold/italic toggles; holds no other
/// state between operations.
#[derive(Debug, Clone, Default)]
pub struct MarkupEngine {
    palette: Palette,
    state: StyleState,
}

impl MarkupEngine {
    /// Create an engine over the given palette, toggles off.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            state: StyleState::new(),
        }
    }

    /// The configured palette.
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flip the bold toggle and return the new value.
    pub const fn toggle_bold(&mut self) -> bool {
        self.state.toggle_bold()
    }

    /// Flip the italic toggle and return the new value.
    pub const fn toggle_italic(&mut self) -> bool {
        self.state.toggle_italic()
    }

    /// Whether bold is active for subsequent applies.
    pub const fn is_bold(&self) -> bool {
        self.state.is_bold()
    }

    /// Whether italic is active for subsequent applies.
    pub const fn is_italic(&self) -> bool {
        self.state.is_italic()
    }

    /// Remove span markup from every selection that carries it.
    ///
    /// Selections without an open marker are left untouched; the pass
    /// reports [`StripOutcome::NothingToStrip`] only when that was true of
    /// all of them. Stripped selections end up covering the unwrapped
    /// text with their anchor/head orientation preserved.
    pub fn strip_markup(&self, buf: &mut impl TextBuffer) -> StripOutcome {
        let initial = buf.selections();
        debug!(selections = initial.len(), "stripping markup");

        let mut stripped_any = false;
        let mut restored: Vec<Option<Selection>> = vec![None; initial.len()];
        for idx in ascending_order(&initial) {
            // Earlier replacements may have shifted this selection; use
            // its live bounds.
            let sel = buf.selections()[idx];
            let (from, to) = sel.normalized();
            if from == to {
                continue;
            }
            let text = buf.get_range(from, to);
            let (stripped, found) = strip_markers(&text);
            if !found {
                continue;
            }
            buf.replace_range(from, to, &stripped);
            let new_to = from.advanced_by(&stripped);
            restored[idx] = Some(if sel.is_reversed() {
                Selection::new(new_to, from)
            } else {
                Selection::new(from, new_to)
            });
            stripped_any = true;
        }

        if !stripped_any {
            return StripOutcome::NothingToStrip;
        }

        // Re-select the unwrapped text; untouched selections keep their
        // live positions.
        let live = buf.selections();
        let selections = live
            .iter()
            .enumerate()
            .map(|(i, sel)| restored[i].unwrap_or(*sel))
            .collect();
        buf.set_selections(selections, 0);
        StripOutcome::Stripped
    }

    /// Wrap every non-empty selection in `descriptor`'s markers.
    ///
    /// Strips existing markup first, unconditionally, so restyling
    /// replaces the old wrapper instead of nesting inside it — even when
    /// the new style equals the old one. Afterwards each selection is
    /// collapsed to a cursor just past its close marker.
    pub fn apply_style(
        &self,
        buf: &mut impl TextBuffer,
        descriptor: &StyleDescriptor,
    ) -> ApplyOutcome {
        if !buf.has_selection() {
            debug!("apply rejected: no selection");
            return ApplyOutcome::NoSelection;
        }
        debug!(style = %descriptor.inline_style(), "applying markup");

        self.strip_markup(buf);

        let initial = buf.selections();
        let mut wrap_ends: Vec<Option<Position>> = vec![None; initial.len()];
        for idx in ascending_order(&initial) {
            let sel = buf.selections()[idx];
            let (from, to) = sel.normalized();
            if from == to {
                continue;
            }
            let wrapped = descriptor.wrap(&buf.get_range(from, to));
            buf.replace_range(from, to, &wrapped);
            wrap_ends[idx] = Some(from.advanced_by(&wrapped));
        }

        // Collapse to cursors once all edits are in, so line lengths are
        // final. Wrap ends are stable: every later edit was downstream.
        let live = buf.selections();
        let collapsed = live
            .iter()
            .enumerate()
            .map(|(i, sel)| {
                wrap_ends[i].map_or(*sel, |end| Selection::cursor(step_past_marker(buf, end)))
            })
            .collect();
        buf.set_selections(collapsed, 0);
        ApplyOutcome::Applied
    }

    /// Apply the palette color at `index` (foreground only), with the
    /// session's bold/italic toggles.
    pub fn apply_color(&self, buf: &mut impl TextBuffer, index: usize) -> ApplyOutcome {
        let descriptor = StyleDescriptor {
            color: Some(self.palette.color(index).to_string()),
            background: None,
            bold: self.state.is_bold(),
            italic: self.state.is_italic(),
        };
        self.apply_style(buf, &descriptor)
    }

    /// Apply the palette highlight at `index`: its text color plus its
    /// background with the fixed alpha suffix, with the session's
    /// bold/italic toggles.
    pub fn apply_highlight(&self, buf: &mut impl TextBuffer, index: usize) -> ApplyOutcome {
        let pair = self.palette.highlight(index);
        let descriptor = StyleDescriptor {
            color: Some(pair.foreground.clone()),
            background: Some(format!("{}{HIGHLIGHT_ALPHA}", pair.background)),
            bold: self.state.is_bold(),
            italic: self.state.is_italic(),
        };
        self.apply_style(buf, &descriptor)
    }
}

/// Selection indices sorted by document position of the range start.
fn ascending_order(selections: &[Selection]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..selections.len()).collect();
    order.sort_by_key(|&i| selections[i].normalized().0);
    order
}

/// Where the cursor lands after a wrap whose inserted text ends at `end`.
///
/// One character forward when the line continues, so the next keystroke
/// lands after the styled span rather than inside the close marker;
/// column 0 of the next line at end-of-line; clamped at end-of-line on
/// the last line of the document.
fn step_past_marker(buf: &impl TextBuffer, end: Position) -> Position {
    let line_len = buf.line_len(end.line);
    if end.col < line_len {
        let tail = buf.get_range(end, Position::new(end.line, line_len));
        let step = tail.chars().next().map_or(1, char::len_utf8);
        Position::new(end.line, end.col + step)
    } else if end.line < buf.last_line() {
        Position::new(end.line + 1, 0)
    } else {
        Position::new(end.line, line_len)
    }
}
