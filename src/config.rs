//! Configuration loading and validation
//!
//! TOML-based configuration for the highlight engine: the window margin and
//! the palette color strings. Loading falls back to defaults when no file is
//! found; parse and validation failures are reported, not papered over.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of padding lines above and below the visible range
pub const DEFAULT_MARGIN_LINES: usize = 5;

/// Upper bound on the configurable margin; beyond this the window stops
/// bounding re-tokenization cost in any meaningful way.
pub const MAX_MARGIN_LINES: usize = 1000;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Invalid margin: {0} lines (maximum {MAX_MARGIN_LINES})")]
    InvalidMargin(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window sizing
    pub window: WindowConfig,

    /// Foreground colors for the eight recognized codes
    pub palette: PaletteConfig,
}

/// Window sizing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Padding lines added above and below the visible range
    pub margin_lines: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            margin_lines: DEFAULT_MARGIN_LINES,
        }
    }
}

/// Palette configuration: one color string per recognized code, either a
/// `#rrggbb` hex value or a CSS color name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            black: "black".to_string(),
            red: "#d15e71".to_string(),
            green: "green".to_string(),
            yellow: "yellow".to_string(),
            blue: "#4e8ed3".to_string(),
            magenta: "magenta".to_string(),
            cyan: "cyan".to_string(),
            white: "white".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the first default location that exists,
    /// falling back to defaults when none is found or loading fails.
    pub fn load() -> Self {
        for path in Self::default_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("failed to load config from {}: {}", path.display(), e);
                }
            }
        }
        Self::default()
    }

    /// Save configuration to a file as pretty TOML
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configuration file paths in order of preference
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(user_config) = dirs::config_dir() {
            paths.push(user_config.join("ansihl").join("config.toml"));
            paths.push(user_config.join("ansihl.toml"));
        }

        paths.push(PathBuf::from("ansihl.toml"));
        paths.push(PathBuf::from(".ansihl.toml"));

        paths
    }

    /// Validate margin bounds and palette color strings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.margin_lines > MAX_MARGIN_LINES {
            return Err(ConfigError::InvalidMargin(self.window.margin_lines));
        }
        crate::palette::Palette::from_config(&self.palette)?;
        Ok(())
    }
}
