//! Color scheme loading.

use super::value::{FromNode, LoadValue};
use super::{LoadContext, Section};
use crate::config::Config;
use crate::error::FieldError;
use crate::types::{ColorPalette, NamedColors, RgbColor};
use serde_yaml_ng::Value;

/// Accepts `"#RRGGBB"`, `"0xRRGGBB"` and a bare hexadecimal integer.
impl FromNode for RgbColor {
    fn from_node(node: &Value) -> Result<Self, FieldError> {
        match node {
            Value::String(s) => s.parse(),
            Value::Number(_) => match node.as_u64() {
                Some(rgb) if rgb <= 0xFF_FFFF => Ok(RgbColor::from_u32(rgb as u32)),
                _ => Err(FieldError::OutOfRange {
                    value: node.as_f64().unwrap_or_default().to_string(),
                    range: "0x000000..=0xFFFFFF",
                }),
            },
            other => Err(FieldError::mismatch("a color", other)),
        }
    }
}

impl LoadValue for RgbColor {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        match RgbColor::from_node(node) {
            Ok(color) => *self = color,
            Err(e) => ctx.report(path, e),
        }
    }
}

impl LoadValue for NamedColors {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        for name in NamedColors::NAMES {
            if let Some(color) = self.get_mut(name) {
                section.load(name, color, ctx);
            }
        }
    }
}

impl LoadValue for ColorPalette {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        if let Some(default) = section.child("default", ctx) {
            default.load("foreground", &mut self.default_foreground, ctx);
            default.load("background", &mut self.default_background, ctx);
        }
        section.load("cursor", &mut self.cursor, ctx);
        if let Some(selection) = section.child("selection", ctx) {
            selection.load("foreground", &mut self.selection_foreground, ctx);
            selection.load("background", &mut self.selection_background, ctx);
        }
        section.load("normal", &mut self.normal, ctx);
        section.load("bright", &mut self.bright, ctx);
        section.load("dim", &mut self.dim, ctx);
    }
}

/// Load `color_schemes`. Each scheme starts from the built-in palette, and
/// schemes not named in the document are kept.
pub(super) fn load_color_schemes(root: &Section<'_>, config: &mut Config, ctx: &mut LoadContext) {
    let Some(section) = root.child("color_schemes", ctx) else {
        return;
    };
    for (name, node) in section.entries(ctx) {
        let mut palette = ColorPalette::default();
        palette.load_into(node, &section.key_path(name), ctx);
        config
            .color_schemes
            .value_mut()
            .insert(name.to_string(), palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load;

    #[test]
    fn test_color_notations() {
        let doc = "\
color_schemes:
    solarized:
        default:
            foreground: \"#839496\"
            background: \"0x002B36\"
        cursor: 0xFFFFFF
        normal:
            red: \"#DC322F\"
";
        let (config, diagnostics) = load(doc);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");

        let scheme = config.color_schemes.get("solarized").unwrap();
        assert_eq!(scheme.default_foreground, RgbColor::from_u32(0x839496));
        assert_eq!(scheme.default_background, RgbColor::from_u32(0x002B36));
        assert_eq!(scheme.cursor, RgbColor::from_u32(0xFFFFFF));
        assert_eq!(scheme.normal.red, RgbColor::from_u32(0xDC322F));
        // Unlisted colors come from the built-in palette.
        assert_eq!(scheme.normal.green, ColorPalette::default().normal.green);
        // The built-in scheme is still there.
        assert!(config.color_schemes.contains_key("default"));
    }

    #[test]
    fn test_bad_color_reported_with_path() {
        let doc = "color_schemes:\n    x:\n        bright:\n            blue: navy\n";
        let (config, diagnostics) = load(doc);
        assert!(diagnostics.mentions("color_schemes.x.bright.blue"));
        assert_eq!(
            config.color_schemes.get("x").unwrap().bright.blue,
            ColorPalette::default().bright.blue
        );
    }
}
