use ropey::Rope;

use super::{remap_position, Position, Selection, TextBuffer};

/// A [`TextBuffer`] backed by a rope.
///
/// Holds the document text plus the current selections and keeps the
/// selections live through every edit, the way a host editor would.
pub struct RopeBuffer {
    rope: Rope,
    selections: Vec<Selection>,
    primary: usize,
}

impl RopeBuffer {
    /// Create a buffer from a string, with a collapsed cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::cursor(Position::new(0, 0))],
            primary: 0,
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace all selections with a single one.
    pub fn select(&mut self, anchor: Position, head: Position) {
        self.selections = vec![Selection::new(anchor, head)];
        self.primary = 0;
    }

    /// The primary selection index.
    pub const fn primary_index(&self) -> usize {
        self.primary
    }

    /// Get the content of a line (without trailing newline).
    fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Convert a position to a ropey char index.
    fn pos_to_char(&self, pos: Position) -> usize {
        let line_start = self.rope.line_to_char(pos.line);
        let line_str = self.rope.line(pos.line).to_string();
        // Byte column to char offset within the line
        let byte_col = pos.col.min(line_str.len());
        line_start + line_str[..byte_col].chars().count()
    }
}

impl TextBuffer for RopeBuffer {
    fn get_range(&self, from: Position, to: Position) -> String {
        let start = self.pos_to_char(from);
        let end = self.pos_to_char(to);
        self.rope.slice(start..end).to_string()
    }

    fn replace_range(&mut self, from: Position, to: Position, new_text: &str) {
        let start = self.pos_to_char(from);
        let end = self.pos_to_char(to);
        self.rope.remove(start..end);
        self.rope.insert(start, new_text);

        // Shift every stored selection through the edit so callers always
        // see live boundaries.
        let inserted_end = from.advanced_by(new_text);
        for sel in &mut self.selections {
            sel.anchor = remap_position(sel.anchor, from, to, inserted_end);
            sel.head = remap_position(sel.head, from, to, inserted_end);
        }
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>, primary: usize) {
        debug_assert!(selections.is_empty() || primary < selections.len());
        self.selections = selections;
        self.primary = primary;
    }

    fn has_selection(&self) -> bool {
        self.selections.iter().any(|sel| !sel.is_empty())
    }

    fn line_len(&self, line: usize) -> usize {
        self.line_at(line).map_or(0, |s| s.len())
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }
}

impl std::fmt::Debug for RopeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RopeBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selections", &self.selections)
            .field("primary", &self.primary)
            .finish()
    }
}
