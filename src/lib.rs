//! # Spanmark
//!
//! An inline span-markup engine for document editors.
//!
//! Spanmark wraps selected text in `<span style="...">` markup (color,
//! highlight, bold, italic) and strips that markup back out, correctly
//! across single or multiple simultaneous selections:
//! - Multi-selection edits run in ascending document order with live
//!   boundary re-fetching, so earlier replacements never corrupt later
//!   ranges
//! - Restyling strips before it applies, so styles replace each other
//!   instead of nesting
//! - After an apply, each selection collapses to a cursor placed past the
//!   close marker, with end-of-line and end-of-document handled
//!
//! The crate never owns document text: hosts supply a
//! [`buffer::TextBuffer`] capability, and a ropey-backed implementation
//! ships for in-process use and tests.
//!
//! ## Modules
//!
//! - [`engine`]: strip/apply operations and cursor repositioning
//! - [`buffer`]: positions, selections, the buffer capability
//! - [`marker`]: the open/close marker matcher
//! - [`style`]: bold/italic session state and style descriptors
//! - [`palette`]: the configurable 5-slot color/highlight palette
//! - [`config`]: palette persistence

pub mod buffer;
pub mod config;
pub mod engine;
pub mod marker;
pub mod palette;
pub mod style;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buffer::{Position, RopeBuffer, Selection, TextBuffer};
    pub use crate::engine::{ApplyOutcome, MarkupEngine, StripOutcome};
    pub use crate::palette::Palette;
    pub use crate::style::{StyleDescriptor, StyleState};
}
