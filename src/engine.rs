//! Window diff engine
//!
//! Tracks, per editor, the last rendered window and the decorations applied
//! for it. On each viewport or document event it computes the new buffered
//! window, re-tokenizes only that window, and reconciles the result against
//! the previous snapshot so unchanged decoration sets are never re-sent and
//! stale ones are retracted.

use crate::ansi::{AnsiColor, Tokenizer};
use crate::config::{Config, DEFAULT_MARGIN_LINES};
use crate::error::Result;
use crate::host::{DecorationHost, TextBuffer};
use crate::models::{Decoration, EditorId, StyleKey};
use crate::palette::{Palette, StyleSpec};
use crate::window::Window;
use std::collections::HashMap;

/// Incremental ANSI color highlighter
#[derive(Debug)]
pub struct HighlightEngine {
    tokenizer: Tokenizer,
    palette: Palette,
    margin_lines: usize,
    /// Per-editor snapshots; keyed by editor id so simultaneously open
    /// editors never share state
    editors: HashMap<EditorId, EditorSnapshot>,
}

/// Last applied window and decorations for one editor
#[derive(Debug, Clone, Default)]
struct EditorSnapshot {
    window: Option<crate::models::ByteRange>,
    applied: HashMap<StyleKey, Vec<Decoration>>,
}

impl HighlightEngine {
    /// Engine with the default palette and margin
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            palette: Palette::default(),
            margin_lines: DEFAULT_MARGIN_LINES,
            editors: HashMap::new(),
        }
    }

    /// Engine configured from a loaded [`Config`]
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(),
            palette: Palette::from_config(&config.palette)?,
            margin_lines: config.window.margin_lines,
            editors: HashMap::new(),
        })
    }

    /// Style descriptions the host must realize before decorations can show
    pub fn style_specs(&self) -> Vec<(StyleKey, StyleSpec)> {
        self.palette.style_specs()
    }

    /// The configured window margin in lines
    pub fn margin_lines(&self) -> usize {
        self.margin_lines
    }

    /// Handle a viewport change, document open, or active-editor switch.
    ///
    /// Computes the buffered window around the visible lines and recomputes
    /// decorations for it. If the window's offset interval is unchanged from
    /// the last render, nothing happens and no host calls are made.
    pub fn viewport_changed(
        &mut self,
        host: &mut impl DecorationHost,
        editor: &EditorId,
        buffer: &impl TextBuffer,
        first_visible: usize,
        last_visible: usize,
    ) {
        self.render(host, editor, buffer, first_visible, last_visible, false);
    }

    /// The manually invoked "render ANSI colors" action.
    ///
    /// Recomputes unconditionally: bypasses the unchanged-window guard and
    /// re-sends byte-identical decoration sets, since the host may have
    /// dropped them (for example after a document was reopened).
    pub fn force_render(
        &mut self,
        host: &mut impl DecorationHost,
        editor: &EditorId,
        buffer: &impl TextBuffer,
        first_visible: usize,
        last_visible: usize,
    ) {
        self.render(host, editor, buffer, first_visible, last_visible, true);
    }

    /// Drop all state for a closed editor
    pub fn editor_closed(&mut self, editor: &EditorId) {
        if self.editors.remove(editor).is_some() {
            debug!(editor = %editor, "dropped highlight state for closed editor");
        }
    }

    /// Editors with tracked state
    pub fn tracked_editor_count(&self) -> usize {
        self.editors.len()
    }

    fn render(
        &mut self,
        host: &mut impl DecorationHost,
        editor: &EditorId,
        buffer: &impl TextBuffer,
        first_visible: usize,
        last_visible: usize,
        force: bool,
    ) {
        let window = Window::around_visible_lines(buffer, first_visible, last_visible, self.margin_lines);

        if !force {
            if let Some(snapshot) = self.editors.get(editor) {
                if snapshot.window == Some(window.range) {
                    trace!(editor = %editor, window = %window.range, "window unchanged, skipping recompute");
                    return;
                }
            }
        }

        let scan = self.tokenizer.scan(buffer.slice(window.range), window.range.start);

        // Map raw code buckets onto styles; codes without a style are dropped.
        let mut next: HashMap<StyleKey, Vec<Decoration>> = HashMap::new();
        for (code, runs) in scan.colored {
            match AnsiColor::from_sgr(code) {
                Some(color) => {
                    next.insert(StyleKey::Color(color), runs);
                }
                None => {
                    debug!(code, runs = runs.len(), "no style for color code, dropping runs");
                }
            }
        }
        next.insert(
            StyleKey::Hidden,
            scan.hidden.into_iter().map(Decoration::plain).collect(),
        );

        let snapshot = self.editors.entry(editor.clone()).or_default();

        // Retract styles that vanished from the new window. Wholesale
        // replacement below handles everything else; only equality against
        // the previously applied snapshot may skip a call, never decide a
        // retraction.
        for (style, old) in &snapshot.applied {
            if !old.is_empty() && !next.contains_key(style) {
                host.set_decorations(editor, *style, &[]);
            }
        }

        let mut applied_calls = 0usize;
        for (style, decorations) in &next {
            let unchanged = snapshot.applied.get(style) == Some(decorations);
            let skip_empty = decorations.is_empty()
                && snapshot.applied.get(style).map_or(true, Vec::is_empty);
            if (unchanged || skip_empty) && !force {
                continue;
            }
            if force && decorations.is_empty() && skip_empty {
                continue;
            }
            host.set_decorations(editor, *style, decorations);
            applied_calls += 1;
        }

        debug!(
            editor = %editor,
            window = %window.range,
            calls = applied_calls,
            "applied window decorations"
        );

        snapshot.window = Some(window.range);
        snapshot.applied = next;
    }
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new()
    }
}
