//! Host collaborator contracts
//!
//! The engine never talks to an editor directly. The host supplies a text
//! buffer with line/offset addressing and a decoration API keyed by style;
//! these traits are the whole surface between the two. `InMemoryBuffer` is a
//! ready-made buffer implementation for tests and embedders.

use crate::models::{ByteRange, Decoration, EditorId, StyleKey};

/// Read access to a document's text with line/offset addressing.
///
/// Offsets are byte offsets. Lines are the `\n`-separated segments of the
/// text; a trailing newline yields a final empty line, matching common
/// editor buffer semantics.
pub trait TextBuffer {
    /// Total length of the document in bytes
    fn len(&self) -> usize;

    /// Whether the document is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Byte offset of the start of `line`, clamped to the document end
    fn offset_at_line(&self, line: usize) -> usize;

    /// The text covered by `range`. Out-of-bounds or non-boundary ranges
    /// degrade to an empty slice rather than failing; decoration is
    /// best-effort by design.
    fn slice(&self, range: ByteRange) -> &str;
}

/// Imperative decoration API supplied by the host.
///
/// `set_decorations` replaces the full range set associated with `style` in
/// `editor`; an empty slice retracts the style entirely. Hosts must treat
/// calls targeting a closed or stale editor as no-ops.
pub trait DecorationHost {
    fn set_decorations(&mut self, editor: &EditorId, style: StyleKey, decorations: &[Decoration]);
}

/// Simple owned text buffer with precomputed line starts
#[derive(Debug, Clone)]
pub struct InMemoryBuffer {
    text: String,
    line_starts: Vec<usize>,
}

impl InMemoryBuffer {
    /// Create a buffer over `text`
    pub fn new(text: String) -> Self {
        let mut line_starts = vec![0];
        for (index, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(index + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Replace the entire buffer content
    pub fn set_text(&mut self, text: String) {
        *self = Self::new(text);
    }

    /// The full text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextBuffer for InMemoryBuffer {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn offset_at_line(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn slice(&self, range: ByteRange) -> &str {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        self.text.get(start..end).unwrap_or("")
    }
}
