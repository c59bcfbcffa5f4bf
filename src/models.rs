//! Core data structures
//!
//! Range, decoration, and editor identity types shared by the tokenizer
//! and the highlight engine.

use crate::ansi::AnsiColor;
use std::fmt;

/// Half-open byte offset interval `[start, end)` into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteRange {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl ByteRange {
    /// Create a new range. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {} past end {}", start, end);
        Self { start, end }
    }

    /// Length of the range in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside the range
    pub fn contains_offset(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether `other` lies entirely inside this range
    pub fn contains(&self, other: &ByteRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one byte
    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A single decoration: a range plus an optional annotation shown on hover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Decorated byte range
    pub range: ByteRange,
    /// Hover annotation, e.g. `ANSI 33: HELLO`
    pub note: Option<String>,
}

impl Decoration {
    /// Decoration with a hover note
    pub fn with_note(range: ByteRange, note: impl Into<String>) -> Self {
        Self {
            range,
            note: Some(note.into()),
        }
    }

    /// Decoration without a note (used for hidden escape bytes)
    pub fn plain(range: ByteRange) -> Self {
        Self { range, note: None }
    }
}

/// Key identifying one host-side decoration style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    /// Foreground color style for one of the eight recognized codes
    Color(AnsiColor),
    /// Concealment style for raw escape bytes
    Hidden,
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleKey::Color(color) => write!(f, "color-{}", color.sgr()),
            StyleKey::Hidden => write!(f, "hidden"),
        }
    }
}

/// Opaque identifier for one editor instance.
///
/// Per-editor highlight state is keyed by this id so multiple open editors
/// never cross-contaminate each other's decorations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorId(String);

impl EditorId {
    /// Create an editor id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
