//! Writers for composite field types.
//!
//! Each writer emits the same keys its loader reads, always in full
//! mapping form.

use super::{DocumentWriter, WriteValue};
use crate::types::{
    Background, Bell, ColorConfig, ColorPalette, CursorConfig, ExecutionProgram, FontConfig,
    FontDescription, History, ImagesConfig, NamedColors, PageSize, Permissions, RendererConfig,
    RgbColor, Scrollbar, SshHost, StatusLine, WindowMargins,
};

impl WriteValue for ExecutionProgram {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("program", &self.program);
        w.field("arguments", &self.arguments);
        w.field("initial_working_directory", &self.initial_working_directory);
        w.field("environment", &self.environment);
        w.field("login", &self.login);
    }
}

impl WriteValue for SshHost {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("host", &self.host);
        w.field("port", &self.port);
        w.field("user", &self.user);
        w.field("private_key", &self.private_key);
        w.field("public_key", &self.public_key);
        w.field("known_hosts", &self.known_hosts);
        w.field("forward_agent", &self.forward_agent);
    }
}

impl WriteValue for WindowMargins {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("horizontal", &self.horizontal);
        w.field("vertical", &self.vertical);
    }
}

impl WriteValue for PageSize {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("columns", &self.columns);
        w.field("lines", &self.lines);
    }
}

impl WriteValue for Background {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("opacity", &self.opacity);
        w.field("blur", &self.blur);
    }
}

impl WriteValue for Bell {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("sound", &self.sound);
        w.field("alert", &self.alert);
        w.field("volume", &self.volume);
    }
}

impl WriteValue for History {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        match self.limit {
            Some(limit) => w.field("limit", &limit),
            None => w.scalar("limit", "-1"),
        }
        w.field("auto_scroll_on_update", &self.auto_scroll_on_update);
        w.field("scroll_multiplier", &self.scroll_multiplier);
    }
}

impl WriteValue for Scrollbar {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("position", &self.position);
        w.field("hide_in_alt_screen", &self.hide_in_alt_screen);
    }
}

impl WriteValue for Permissions {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("capture_buffer", &self.capture_buffer);
        w.field("change_font", &self.change_font);
        w.field(
            "display_host_writable_statusline",
            &self.display_host_writable_statusline,
        );
    }
}

impl WriteValue for CursorConfig {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("shape", &self.shape);
        w.field("blinking", &self.blinking);
        w.field("blinking_interval", &self.blinking_interval);
    }
}

impl WriteValue for StatusLine {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("display", &self.display);
        w.field("position", &self.position);
        w.field("sync_window_title", &self.sync_window_title);
    }
}

impl WriteValue for FontDescription {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("family", &self.family);
        w.field("weight", &self.weight);
        w.field("slant", &self.slant);
        w.field("features", &self.features);
    }
}

impl WriteValue for FontConfig {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("size", &self.size);
        w.field("dpi_scale", &self.dpi_scale);
        w.field("locator", &self.locator);
        {
            let mut shaping = w.section("text_shaping");
            shaping.field("engine", &self.text_shaping_engine);
        }
        w.field("render_mode", &self.render_mode);
        w.field("builtin_box_drawing", &self.builtin_box_drawing);
        w.field("strict_spacing", &self.strict_spacing);
        w.field("regular", &self.regular);
        w.field("bold", &self.bold);
        w.field("italic", &self.italic);
        w.field("bold_italic", &self.bold_italic);
        w.field("emoji", &self.emoji);
    }
}

impl WriteValue for ColorConfig {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        match self {
            ColorConfig::Simple(name) => w.field(key, name),
            ColorConfig::Dual { light, dark } => {
                let mut w = w.section(key);
                w.field("light", light);
                w.field("dark", dark);
            }
        }
    }
}

impl WriteValue for RendererConfig {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("backend", &self.backend);
        w.field("tile_hashtable_slots", &self.tile_hashtable_slots);
        w.field("tile_cache_count", &self.tile_cache_count);
    }
}

impl WriteValue for ImagesConfig {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.field("sixel_scrolling", &self.sixel_scrolling);
        w.field("sixel_register_count", &self.sixel_register_count);
        w.field("max_width", &self.max_width);
        w.field("max_height", &self.max_height);
    }
}

// ============================================================================
// Colors
// ============================================================================

impl WriteValue for RgbColor {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        w.scalar(key, &format!("\"{self}\""));
    }
}

impl WriteValue for NamedColors {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        for (name, color) in NamedColors::NAMES.iter().zip(self.to_array()) {
            w.field(name, &color);
        }
    }
}

impl WriteValue for ColorPalette {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        {
            let mut default = w.section("default");
            default.field("foreground", &self.default_foreground);
            default.field("background", &self.default_background);
        }
        w.field("cursor", &self.cursor);
        {
            let mut selection = w.section("selection");
            selection.field("foreground", &self.selection_foreground);
            selection.field("background", &self.selection_background);
        }
        w.field("normal", &self.normal);
        w.field("bright", &self.bright);
        w.field("dim", &self.dim);
    }
}
