//! Color types: RGB values, color palettes and the profile's scheme selection.

use crate::error::FieldError;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// RGB Color
// ============================================================================

/// 24-bit RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl FromStr for RgbColor {
    type Err = FieldError;

    /// Accepts `#RRGGBB` and `0xRRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| FieldError::Invalid(format!("invalid color '{s}' (expected #RRGGBB)")))?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FieldError::Invalid(format!(
                "invalid color '{s}' (expected 6 hex digits)"
            )));
        }

        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|e| FieldError::Invalid(format!("invalid color '{s}': {e}")))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// The eight ANSI colors of one intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NamedColors {
    pub black: RgbColor,
    pub red: RgbColor,
    pub green: RgbColor,
    pub yellow: RgbColor,
    pub blue: RgbColor,
    pub magenta: RgbColor,
    pub cyan: RgbColor,
    pub white: RgbColor,
}

impl NamedColors {
    /// Document names in ANSI index order.
    pub const NAMES: [&'static str; 8] = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    /// Build from colors in ANSI index order.
    pub const fn from_array(colors: [RgbColor; 8]) -> Self {
        let [black, red, green, yellow, blue, magenta, cyan, white] = colors;
        Self {
            black,
            red,
            green,
            yellow,
            blue,
            magenta,
            cyan,
            white,
        }
    }

    /// Colors in ANSI index order.
    pub fn to_array(&self) -> [RgbColor; 8] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
        ]
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RgbColor> {
        match name {
            "black" => Some(&mut self.black),
            "red" => Some(&mut self.red),
            "green" => Some(&mut self.green),
            "yellow" => Some(&mut self.yellow),
            "blue" => Some(&mut self.blue),
            "magenta" => Some(&mut self.magenta),
            "cyan" => Some(&mut self.cyan),
            "white" => Some(&mut self.white),
            _ => None,
        }
    }
}

/// A named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPalette {
    pub default_foreground: RgbColor,
    pub default_background: RgbColor,
    /// Cursor color.
    pub cursor: RgbColor,
    pub selection_foreground: RgbColor,
    pub selection_background: RgbColor,
    pub normal: NamedColors,
    pub bright: NamedColors,
    pub dim: NamedColors,
}

impl Default for ColorPalette {
    fn default() -> Self {
        crate::defaults::color_palette()
    }
}

impl ColorPalette {
    /// Look up one of the 16 indexed colors (0-7 normal, 8-15 bright).
    pub fn indexed(&self, index: u8) -> Option<RgbColor> {
        let (set, i) = match index {
            0..=7 => (&self.normal, index),
            8..=15 => (&self.bright, index - 8),
            _ => return None,
        };
        set.to_array().get(usize::from(i)).copied()
    }
}

// ============================================================================
// Scheme Selection
// ============================================================================

/// Which color scheme a profile uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorConfig {
    /// One scheme regardless of the desktop appearance.
    Simple(String),
    /// Separate schemes for light and dark desktop appearance.
    Dual { light: String, dark: String },
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig::Simple(crate::defaults::color_scheme_name())
    }
}

impl ColorConfig {
    /// Scheme name for the given desktop appearance.
    pub fn scheme_name(&self, dark_mode: bool) -> &str {
        match self {
            ColorConfig::Simple(name) => name,
            ColorConfig::Dual { light, dark } => {
                if dark_mode {
                    dark
                } else {
                    light
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_notations() {
        assert_eq!("#FF8000".parse::<RgbColor>(), Ok(RgbColor::new(255, 128, 0)));
        assert_eq!("0x0a0b0c".parse::<RgbColor>(), Ok(RgbColor::new(10, 11, 12)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("FF8000".parse::<RgbColor>().is_err());
        assert!("#FF80".parse::<RgbColor>().is_err());
        assert!("#GG8000".parse::<RgbColor>().is_err());
    }

    #[test]
    fn test_display_uppercase_hash() {
        assert_eq!(RgbColor::from_u32(0x1a2b3c).to_string(), "#1A2B3C");
    }

    #[test]
    fn test_indexed_colors() {
        let palette = ColorPalette::default();
        assert_eq!(palette.indexed(1), Some(palette.normal.red));
        assert_eq!(palette.indexed(15), Some(palette.bright.white));
        assert_eq!(palette.indexed(16), None);
    }

    #[test]
    fn test_dual_scheme_selection() {
        let colors = ColorConfig::Dual {
            light: "one-light".to_string(),
            dark: "one-dark".to_string(),
        };
        assert_eq!(colors.scheme_name(true), "one-dark");
        assert_eq!(colors.scheme_name(false), "one-light");
        assert_eq!(ColorConfig::default().scheme_name(true), "default");
    }
}
