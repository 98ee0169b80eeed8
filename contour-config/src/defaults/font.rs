//! Default values for font settings.

pub fn font_family() -> String {
    "monospace".to_string()
}

pub fn emoji_font_family() -> String {
    "emoji".to_string()
}

pub fn font_size() -> f32 {
    12.0
}
