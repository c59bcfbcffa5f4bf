//! Buffered window computation
//!
//! Converts the visible line interval of an editor into a padded, clamped
//! absolute offset interval. Bounding re-tokenization to this window is what
//! keeps recompute cost independent of document size.

use crate::host::TextBuffer;
use crate::models::ByteRange;

/// The buffered sub-range of a document that decorations are computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First line covered, after padding and clamping
    pub first_line: usize,
    /// Last line covered (inclusive), after padding and clamping
    pub last_line: usize,
    /// Absolute offset interval `[start, end)` covering those lines
    pub range: ByteRange,
}

impl Window {
    /// Compute the window around a visible line interval.
    ///
    /// Pads `[first_visible, last_visible]` by `margin` lines on each side
    /// and clamps to the document. The offset interval runs from the start
    /// of the first covered line to the start of the line after the last
    /// covered one (or the end of the document).
    pub fn around_visible_lines(
        buffer: &impl TextBuffer,
        first_visible: usize,
        last_visible: usize,
        margin: usize,
    ) -> Self {
        let line_count = buffer.line_count();
        if line_count == 0 {
            return Self {
                first_line: 0,
                last_line: 0,
                range: ByteRange::new(0, 0),
            };
        }

        let first_line = first_visible.saturating_sub(margin);
        let last_line = last_visible.saturating_add(margin).min(line_count - 1);
        let first_line = first_line.min(last_line);

        let start = buffer.offset_at_line(first_line);
        let end = if last_line + 1 < line_count {
            buffer.offset_at_line(last_line + 1)
        } else {
            buffer.len()
        };

        Self {
            first_line,
            last_line,
            range: ByteRange::new(start, end),
        }
    }
}
