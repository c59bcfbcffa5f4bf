//! ANSI escape sequence tokenizer
//!
//! Scans a text window for SGR foreground color escapes and produces two
//! views of it: colored visible runs bucketed by color code, and the spans
//! of raw escape bytes that should be concealed.

use crate::models::{ByteRange, Decoration};
use regex::Regex;
use std::collections::BTreeMap;

/// The reset sequence, excluded from coloring but still hidden
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// ANSI escape sequence tokenizer
#[derive(Debug)]
pub struct Tokenizer {
    /// Matches a color-introducing token: ESC `[`, optional digits, `m`
    token_regex: Regex,
    /// Matches every SGR escape for hiding, including compound codes
    escape_regex: Regex,
}

/// Result of scanning one window of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Colored visible runs, keyed by the raw numeric color code
    pub colored: BTreeMap<u16, Vec<Decoration>>,
    /// Byte spans of every escape sequence, in scan order
    pub hidden: Vec<ByteRange>,
}

impl ScanResult {
    /// Total number of colored runs across all code buckets
    pub fn colored_run_count(&self) -> usize {
        self.colored.values().map(Vec::len).sum()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with compiled patterns
    pub fn new() -> Self {
        Self {
            token_regex: Regex::new(r"\x1b\[([0-9]+)?m").unwrap(),
            escape_regex: Regex::new(r"\x1b\[[0-9;]*m").unwrap(),
        }
    }

    /// Scan `text` for color escapes and visible runs.
    ///
    /// `base` is the absolute offset of `text` within the document; all
    /// ranges in the result are absolute. Each non-reset token with a numeric
    /// code opens a visible run ending at the next token match or at the end
    /// of the scanned text, so adjacent runs share a boundary with no gap and
    /// no overlap. Codes the palette does not recognize still get a bucket
    /// here; the engine drops them at decoration-apply time.
    pub fn scan(&self, text: &str, base: usize) -> ScanResult {
        let mut colored: BTreeMap<u16, Vec<Decoration>> = BTreeMap::new();

        let matches: Vec<_> = self.token_regex.captures_iter(text).collect();

        for (index, caps) in matches.iter().enumerate() {
            let token = caps.get(0).expect("match always has group 0");
            if token.as_str() == RESET_SEQUENCE {
                continue;
            }

            // A token without digits introduces no color; it is only hidden.
            let code = match caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok()) {
                Some(code) => code,
                None => continue,
            };

            let run_start = token.end();
            let run_end = matches
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map(|next| next.start())
                .unwrap_or(text.len());

            let visible = &text[run_start..run_end];
            colored.entry(code).or_default().push(Decoration::with_note(
                ByteRange::new(base + run_start, base + run_end),
                format!("ANSI {}: {}", code, visible),
            ));
        }

        let hidden = self
            .escape_regex
            .find_iter(text)
            .map(|m| ByteRange::new(base + m.start(), base + m.end()))
            .collect();

        ScanResult { colored, hidden }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The eight recognized SGR foreground colors (codes 30 through 37)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// All colors in SGR code order
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Map an SGR foreground code (30..=37) to a color
    pub fn from_sgr(code: u16) -> Option<Self> {
        match code {
            30 => Some(AnsiColor::Black),
            31 => Some(AnsiColor::Red),
            32 => Some(AnsiColor::Green),
            33 => Some(AnsiColor::Yellow),
            34 => Some(AnsiColor::Blue),
            35 => Some(AnsiColor::Magenta),
            36 => Some(AnsiColor::Cyan),
            37 => Some(AnsiColor::White),
            _ => None,
        }
    }

    /// The SGR foreground code for this color
    pub fn sgr(&self) -> u16 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
        }
    }
}
