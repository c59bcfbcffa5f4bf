//! Color palette and host style descriptions
//!
//! Maps the eight recognized SGR foreground codes to concrete colors and
//! describes the styles a host must create (one per color, plus the
//! concealment style for escape bytes).

use crate::ansi::AnsiColor;
use crate::config::{ConfigError, PaletteConfig};
use crate::models::StyleKey;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color string: `#rrggbb` hex or a CSS color name.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(ConfigError::InvalidColor(value.to_string()));
            }
            let byte = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16)
                    .map_err(|_| ConfigError::InvalidColor(value.to_string()))
            };
            return Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?));
        }

        match value.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::new(0, 0, 0)),
            "red" => Ok(Self::new(255, 0, 0)),
            "green" => Ok(Self::new(0, 128, 0)),
            "yellow" => Ok(Self::new(255, 255, 0)),
            "blue" => Ok(Self::new(0, 0, 255)),
            "magenta" => Ok(Self::new(255, 0, 255)),
            "cyan" => Ok(Self::new(0, 255, 255)),
            "white" => Ok(Self::new(255, 255, 255)),
            "gray" | "grey" => Ok(Self::new(128, 128, 128)),
            _ => Err(ConfigError::InvalidColor(value.to_string())),
        }
    }

    /// Format as `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// What a host must render for one style key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSpec {
    /// Foreground text color
    Foreground(Rgb),
    /// Render the decorated bytes invisibly (zero opacity, zero size)
    HiddenText,
}

/// Resolved color table for the eight recognized codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 8],
}

impl Palette {
    /// Build a palette from configured color strings
    pub fn from_config(config: &PaletteConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            colors: [
                Rgb::parse(&config.black)?,
                Rgb::parse(&config.red)?,
                Rgb::parse(&config.green)?,
                Rgb::parse(&config.yellow)?,
                Rgb::parse(&config.blue)?,
                Rgb::parse(&config.magenta)?,
                Rgb::parse(&config.cyan)?,
                Rgb::parse(&config.white)?,
            ],
        })
    }

    /// The concrete color for one recognized ANSI color
    pub fn color(&self, color: AnsiColor) -> Rgb {
        self.colors[(color.sgr() - 30) as usize]
    }

    /// Style descriptions the host uses to create its decoration styles:
    /// eight foreground colors plus the hidden-text style.
    pub fn style_specs(&self) -> Vec<(StyleKey, StyleSpec)> {
        let mut specs: Vec<_> = AnsiColor::ALL
            .iter()
            .map(|&c| (StyleKey::Color(c), StyleSpec::Foreground(self.color(c))))
            .collect();
        specs.push((StyleKey::Hidden, StyleSpec::HiddenText));
        specs
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default()).expect("default palette colors are valid")
    }
}
