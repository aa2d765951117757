//! Positions, selections, and the text-buffer capability.
//!
//! The engine never owns document text. It works against any type
//! implementing [`TextBuffer`], which the host editor supplies. A
//! ropey-backed implementation ships in [`rope`] for tests and for hosts
//! that keep their text in-process.

mod rope;

pub use rope::RopeBuffer;

/// A location in document text.
///
/// `col` is a byte offset within the line, excluding the line terminator.
/// Ordering is lexicographic: first by line, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based byte column within the line.
    pub col: usize,
}

impl Position {
    /// Create a position at the given line and column.
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The position reached by inserting `text` at `self`.
    ///
    /// Single-line text advances the column; text with newlines lands at
    /// the end of its last segment.
    pub fn advanced_by(self, text: &str) -> Self {
        match text.rfind('\n') {
            None => Self::new(self.line, self.col + text.len()),
            Some(last_newline) => Self::new(
                self.line + text.bytes().filter(|&b| b == b'\n').count(),
                text.len() - last_newline - 1,
            ),
        }
    }
}

/// A selection as the host editor reports it.
///
/// `anchor` is where the selection started, `head` is where the cursor
/// rests. They need not be in document order; use [`Selection::normalized`]
/// for a `(from, to)` pair that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Fixed end of the selection.
    pub anchor: Position,
    /// Moving end of the selection (the cursor).
    pub head: Position,
}

impl Selection {
    /// Create a selection spanning from `anchor` to `head`.
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (a plain cursor) at `pos`.
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// The selection's bounds in document order.
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Whether the selection covers no text.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Whether the head precedes the anchor.
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }
}

/// Text access the engine needs from the host editor.
///
/// Contract for implementers: [`TextBuffer::replace_range`] replaces the
/// half-open span `[from, to)` and shifts every downstream position by the
/// length delta of the edit. Stored selections must stay live through
/// edits — the engine re-fetches [`TextBuffer::selections`] before each
/// replacement in a multi-selection pass and relies on the returned
/// boundaries being current. [`remap_position`] implements the required
/// position adjustment.
pub trait TextBuffer {
    /// Text in `[from, to)`.
    fn get_range(&self, from: Position, to: Position) -> String;

    /// Replace `[from, to)` with `new_text`, keeping selections live.
    fn replace_range(&mut self, from: Position, to: Position, new_text: &str);

    /// Current selections, in the host's order.
    fn selections(&self) -> Vec<Selection>;

    /// Replace all selections; `primary` indexes the primary one.
    fn set_selections(&mut self, selections: Vec<Selection>, primary: usize);

    /// Whether any selection covers text.
    fn has_selection(&self) -> bool;

    /// Byte length of a line, excluding the line terminator.
    fn line_len(&self, line: usize) -> usize;

    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }
}

/// Map `pos` through a replacement of `[from, to)` whose inserted text
/// ends at `inserted_end`.
///
/// Positions at or before the edit are unchanged, positions after it shift
/// by the edit's length delta, and positions inside the replaced span clamp
/// to the end of the inserted text.
pub fn remap_position(
    pos: Position,
    from: Position,
    to: Position,
    inserted_end: Position,
) -> Position {
    if pos <= from {
        pos
    } else if pos >= to {
        if pos.line == to.line {
            Position::new(inserted_end.line, inserted_end.col + (pos.col - to.col))
        } else {
            let line_delta = inserted_end.line as isize - to.line as isize;
            Position::new(pos.line.wrapping_add_signed(line_delta), pos.col)
        }
    } else {
        inserted_end
    }
}
