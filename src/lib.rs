//! ansihl - incremental ANSI color highlighting for editor buffers
//!
//! Log files and captured terminal output keep their ANSI SGR foreground
//! escapes as raw bytes. This crate tokenizes those escapes and drives an
//! editor host so the escaped text renders in color while the escape bytes
//! themselves are hidden, without ever mutating the document.
//!
//! Work is windowed: only the visible lines plus a configurable margin are
//! tokenized, and per-editor snapshots let repeated viewport events skip
//! recomputation entirely.
//!
//! ```
//! use ansihl::{EditorId, HighlightEngine, InMemoryBuffer};
//! use ansihl::{Decoration, DecorationHost, StyleKey};
//!
//! struct NullHost;
//! impl DecorationHost for NullHost {
//!     fn set_decorations(&mut self, _: &EditorId, _: StyleKey, _: &[Decoration]) {}
//! }
//!
//! let mut engine = HighlightEngine::new();
//! let buffer = InMemoryBuffer::new("\x1b[31merror:\x1b[0m disk full\n".to_string());
//! engine.viewport_changed(&mut NullHost, &EditorId::new("log"), &buffer, 0, 0);
//! ```

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod models;
pub mod palette;
pub mod window;

pub use ansi::{AnsiColor, ScanResult, Tokenizer, RESET_SEQUENCE};
pub use config::{Config, ConfigError, PaletteConfig, WindowConfig};
pub use engine::HighlightEngine;
pub use error::{Error, Result};
pub use host::{DecorationHost, InMemoryBuffer, TextBuffer};
pub use models::{ByteRange, Decoration, EditorId, StyleKey};
pub use palette::{Palette, Rgb, StyleSpec};
pub use window::Window;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
