//! Default color scheme.

use crate::types::{ColorPalette, NamedColors, RgbColor};

pub fn color_scheme_name() -> String {
    "default".to_string()
}

const fn rgb(value: u32) -> RgbColor {
    RgbColor::from_u32(value)
}

pub fn color_palette() -> ColorPalette {
    ColorPalette {
        default_foreground: rgb(0xD0D0D0),
        default_background: rgb(0x1A1716),
        cursor: rgb(0x6D6D6D),
        selection_foreground: rgb(0xFFFFFF),
        selection_background: rgb(0x4D4D9A),
        normal: NamedColors::from_array([
            rgb(0x000000),
            rgb(0xA00000),
            rgb(0x00A000),
            rgb(0xA0A000),
            rgb(0x0000A0),
            rgb(0xA000A0),
            rgb(0x00A0A0),
            rgb(0xC0C0C0),
        ]),
        bright: NamedColors::from_array([
            rgb(0x707070),
            rgb(0xFF0000),
            rgb(0x00FF00),
            rgb(0xFFFF00),
            rgb(0x0000FF),
            rgb(0xFF00FF),
            rgb(0x00FFFF),
            rgb(0xFFFFFF),
        ]),
        dim: NamedColors::from_array([
            rgb(0x000000),
            rgb(0x700000),
            rgb(0x007000),
            rgb(0x707000),
            rgb(0x000070),
            rgb(0x700070),
            rgb(0x007070),
            rgb(0x808080),
        ]),
    }
}
