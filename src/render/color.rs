//! Bar colors and the highlight palette.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 24-bit color, written as `#RRGGBB` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise interpolation, `t` in `[0, 1]`.
    pub fn mix(&self, to: &Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(self.r, to.r), channel(self.g, to.g), channel(self.b, to.b))
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ConfigError::Color(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| err());
        Ok(Rgb::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value.r, value.g, value.b)
    }
}

/// Fill colors for each highlight role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub default: Rgb,
    pub compare: Rgb,
    pub min: Rgb,
    pub current: Rgb,
    pub swap: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: Rgb::new(0x19, 0x76, 0xD2),
            compare: Rgb::new(0x21, 0x96, 0xF3),
            min: Rgb::new(0xFF, 0x98, 0x00),
            current: Rgb::new(0xE9, 0x1E, 0x63),
            swap: Rgb::new(0x9C, 0x27, 0xB0),
        }
    }
}
