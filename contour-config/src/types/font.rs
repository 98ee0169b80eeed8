//! Font configuration types: font descriptions and the font pipeline settings
//! a profile hands to the renderer.

use crate::defaults;
use serde::{Deserialize, Serialize};

// ============================================================================
// Font Description
// ============================================================================

/// Font weight requested from the font locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Demilight,
    Book,
    #[default]
    Normal,
    Medium,
    Demibold,
    Bold,
    ExtraBold,
    Black,
    ExtraBlack,
}

/// Font slant requested from the font locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// One font face: family name plus style and OpenType feature toggles.
///
/// In the document this is either a mapping with `family`, `weight`, `slant`
/// and `features`, or just the family name as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescription {
    pub family: String,
    pub weight: FontWeight,
    pub slant: FontSlant,
    /// OpenType feature tags, e.g. `ss01` or `-liga`.
    pub features: Vec<String>,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            family: defaults::font_family(),
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            features: Vec::new(),
        }
    }
}

impl FontDescription {
    pub fn with_style(family: impl Into<String>, weight: FontWeight, slant: FontSlant) -> Self {
        Self {
            family: family.into(),
            weight,
            slant,
            features: Vec::new(),
        }
    }
}

// ============================================================================
// Font Pipeline Settings
// ============================================================================

/// Backend used to locate font files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontLocator {
    /// Platform default (fontconfig, CoreText or DirectWrite)
    #[default]
    Native,
    Fontconfig,
    CoreText,
    DirectWrite,
    /// Fixed in-memory font set, for tests
    Mock,
}

/// Text shaping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextShapingEngine {
    /// Platform default shaper
    #[default]
    Native,
    OpenShaper,
    DWrite,
    CoreText,
}

/// Glyph rasterization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Lcd,
    Light,
    #[default]
    Gray,
    Monochrome,
}

/// Font settings of a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    /// Font size in points.
    pub size: f32,
    /// Extra DPI scaling factor applied on top of the display DPI.
    pub dpi_scale: f32,
    pub locator: FontLocator,
    pub text_shaping_engine: TextShapingEngine,
    pub render_mode: RenderMode,
    /// Draw box drawing and block characters without using the font.
    pub builtin_box_drawing: bool,
    /// Only accept monospace fonts when resolving fallbacks.
    pub strict_spacing: bool,
    pub regular: FontDescription,
    pub bold: FontDescription,
    pub italic: FontDescription,
    pub bold_italic: FontDescription,
    pub emoji: FontDescription,
}

impl Default for FontConfig {
    fn default() -> Self {
        let family = defaults::font_family();
        Self {
            size: defaults::font_size(),
            dpi_scale: 1.0,
            locator: FontLocator::Native,
            text_shaping_engine: TextShapingEngine::Native,
            render_mode: RenderMode::Gray,
            builtin_box_drawing: true,
            strict_spacing: true,
            regular: FontDescription::with_style(&family, FontWeight::Normal, FontSlant::Normal),
            bold: FontDescription::with_style(&family, FontWeight::Bold, FontSlant::Normal),
            italic: FontDescription::with_style(&family, FontWeight::Normal, FontSlant::Italic),
            bold_italic: FontDescription::with_style(&family, FontWeight::Bold, FontSlant::Italic),
            emoji: FontDescription::with_style(
                defaults::emoji_font_family(),
                FontWeight::Normal,
                FontSlant::Normal,
            ),
        }
    }
}
