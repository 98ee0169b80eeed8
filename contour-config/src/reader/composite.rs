//! Loaders for composite field types.
//!
//! Composites overlay member by member: members missing from the document
//! keep their current value, and a member that fails to load is reported
//! without affecting its siblings.

use super::value::{FromNode, LoadValue};
use super::{LoadContext, Section};
use crate::error::FieldError;
use crate::types::{
    Background, Bell, ColorConfig, CursorConfig, ExecutionProgram, FontConfig, FontDescription,
    History, ImagesConfig, PageSize, Permissions, RendererConfig, Scrollbar, SshHost, StatusLine,
    WindowMargins,
};
use serde_yaml_ng::Value;

fn unit_interval(value: &f32) -> Result<(), FieldError> {
    if (0.0..=1.0).contains(value) {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            value: value.to_string(),
            range: "0.0..=1.0",
        })
    }
}

fn positive_f32(value: &f32) -> Result<(), FieldError> {
    if *value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            value: value.to_string(),
            range: "must be greater than 0",
        })
    }
}

fn positive_u16(value: &u16) -> Result<(), FieldError> {
    if *value > 0 {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            value: value.to_string(),
            range: "must be greater than 0",
        })
    }
}

// ============================================================================
// Process Launch
// ============================================================================

impl LoadValue for ExecutionProgram {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        // `shell: /bin/zsh` only sets the program.
        if node.is_string() {
            self.program.load_into(node, path, ctx);
            return;
        }
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("program", &mut self.program, ctx);
        section.load("arguments", &mut self.arguments, ctx);
        section.load(
            "initial_working_directory",
            &mut self.initial_working_directory,
            ctx,
        );
        section.load("environment", &mut self.environment, ctx);
        section.load("login", &mut self.login, ctx);
    }
}

impl LoadValue for SshHost {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("host", &mut self.host, ctx);
        section.load("port", &mut self.port, ctx);
        section.load("user", &mut self.user, ctx);
        section.load("private_key", &mut self.private_key, ctx);
        section.load("public_key", &mut self.public_key, ctx);
        section.load("known_hosts", &mut self.known_hosts, ctx);
        section.load("forward_agent", &mut self.forward_agent, ctx);
    }
}

// ============================================================================
// Window
// ============================================================================

impl LoadValue for WindowMargins {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("horizontal", &mut self.horizontal, ctx);
        section.load("vertical", &mut self.vertical, ctx);
    }
}

impl LoadValue for PageSize {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load_validated("columns", &mut self.columns, ctx, positive_u16);
        section.load_validated("lines", &mut self.lines, ctx, positive_u16);
    }
}

impl LoadValue for Background {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load_validated("opacity", &mut self.opacity, ctx, unit_interval);
        section.load("blur", &mut self.blur, ctx);
    }
}

impl LoadValue for Bell {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("sound", &mut self.sound, ctx);
        section.load("alert", &mut self.alert, ctx);
        section.load_validated("volume", &mut self.volume, ctx, unit_interval);
    }
}

// ============================================================================
// Terminal
// ============================================================================

/// `-1` means unlimited.
fn history_limit(node: &Value) -> Result<Option<usize>, FieldError> {
    match i64::from_node(node)? {
        -1 => Ok(None),
        n => usize::try_from(n).map(Some).map_err(|_| FieldError::OutOfRange {
            value: n.to_string(),
            range: "-1 or a line count",
        }),
    }
}

impl LoadValue for History {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        if let Some(limit) = section.get("limit") {
            match history_limit(limit) {
                Ok(limit) => self.limit = limit,
                Err(e) => ctx.report(&section.key_path("limit"), e),
            }
        }
        section.load("auto_scroll_on_update", &mut self.auto_scroll_on_update, ctx);
        section.load("scroll_multiplier", &mut self.scroll_multiplier, ctx);
    }
}

impl LoadValue for Scrollbar {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("position", &mut self.position, ctx);
        section.load("hide_in_alt_screen", &mut self.hide_in_alt_screen, ctx);
    }
}

impl LoadValue for Permissions {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("capture_buffer", &mut self.capture_buffer, ctx);
        section.load("change_font", &mut self.change_font, ctx);
        section.load(
            "display_host_writable_statusline",
            &mut self.display_host_writable_statusline,
            ctx,
        );
    }
}

impl LoadValue for CursorConfig {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("shape", &mut self.shape, ctx);
        section.load("blinking", &mut self.blinking, ctx);
        section.load("blinking_interval", &mut self.blinking_interval, ctx);
    }
}

impl LoadValue for StatusLine {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("display", &mut self.display, ctx);
        section.load("position", &mut self.position, ctx);
        section.load("sync_window_title", &mut self.sync_window_title, ctx);
    }
}

// ============================================================================
// Fonts & Colors
// ============================================================================

impl LoadValue for FontDescription {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        // `regular: Fira Code` only sets the family.
        if node.is_string() {
            self.family.load_into(node, path, ctx);
            return;
        }
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("family", &mut self.family, ctx);
        section.load("weight", &mut self.weight, ctx);
        section.load("slant", &mut self.slant, ctx);
        section.load("features", &mut self.features, ctx);
    }
}

impl LoadValue for FontConfig {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load_validated("size", &mut self.size, ctx, positive_f32);
        section.load_validated("dpi_scale", &mut self.dpi_scale, ctx, positive_f32);
        section.load("locator", &mut self.locator, ctx);
        if let Some(shaping) = section.child("text_shaping", ctx) {
            shaping.load("engine", &mut self.text_shaping_engine, ctx);
        }
        section.load("render_mode", &mut self.render_mode, ctx);
        section.load("builtin_box_drawing", &mut self.builtin_box_drawing, ctx);
        section.load("strict_spacing", &mut self.strict_spacing, ctx);
        section.load("regular", &mut self.regular, ctx);
        section.load("bold", &mut self.bold, ctx);
        section.load("italic", &mut self.italic, ctx);
        section.load("bold_italic", &mut self.bold_italic, ctx);
        section.load("emoji", &mut self.emoji, ctx);
    }
}

impl LoadValue for ColorConfig {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        if node.is_string() {
            let mut name = String::new();
            name.load_into(node, path, ctx);
            *self = ColorConfig::Simple(name);
            return;
        }
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        if section.get("light").is_none() && section.get("dark").is_none() {
            return;
        }
        let (mut light, mut dark) = match self {
            ColorConfig::Simple(name) => (name.clone(), name.clone()),
            ColorConfig::Dual { light, dark } => (light.clone(), dark.clone()),
        };
        section.load("light", &mut light, ctx);
        section.load("dark", &mut dark, ctx);
        *self = ColorConfig::Dual { light, dark };
    }
}

// ============================================================================
// Global Settings
// ============================================================================

impl LoadValue for RendererConfig {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("backend", &mut self.backend, ctx);
        section.load("tile_hashtable_slots", &mut self.tile_hashtable_slots, ctx);
        section.load("tile_cache_count", &mut self.tile_cache_count, ctx);
    }
}

impl LoadValue for ImagesConfig {
    fn load_into(&mut self, node: &Value, path: &str, ctx: &mut LoadContext) {
        let Some(section) = Section::of(node, path, ctx) else {
            return;
        };
        section.load("sixel_scrolling", &mut self.sixel_scrolling, ctx);
        section.load("sixel_register_count", &mut self.sixel_register_count, ctx);
        section.load("max_width", &mut self.max_width, ctx);
        section.load("max_height", &mut self.max_height, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CursorShape, FontWeight, Permission};
    use std::time::Duration;

    fn load<T: LoadValue>(target: &mut T, text: &str) -> Vec<String> {
        let node: Value = serde_yaml_ng::from_str(text).unwrap();
        let mut ctx = LoadContext::default();
        target.load_into(&node, "field", &mut ctx);
        ctx.finish().iter().map(|d| d.path.clone()).collect()
    }

    #[test]
    fn test_shell_shorthand_keeps_other_members() {
        let mut shell = ExecutionProgram {
            arguments: vec!["-l".to_string()],
            ..Default::default()
        };
        assert!(load(&mut shell, "/bin/fish").is_empty());
        assert_eq!(shell.program, "/bin/fish");
        assert_eq!(shell.arguments, vec!["-l".to_string()]);
    }

    #[test]
    fn test_shell_mapping() {
        let mut shell = ExecutionProgram::default();
        let errors = load(
            &mut shell,
            "{program: zsh, arguments: [-i], environment: {EDITOR: vim}, login: true}",
        );
        assert!(errors.is_empty());
        assert_eq!(shell.program, "zsh");
        assert_eq!(shell.arguments, vec!["-i".to_string()]);
        assert_eq!(shell.environment.get("EDITOR").map(String::as_str), Some("vim"));
        assert!(shell.login);
    }

    #[test]
    fn test_member_failure_is_isolated() {
        let mut cursor = CursorConfig::default();
        let errors = load(
            &mut cursor,
            "{shape: hexagon, blinking: true, blinking_interval: 250}",
        );
        assert_eq!(errors, vec!["field.shape".to_string()]);
        assert_eq!(cursor.shape, CursorShape::Block);
        assert!(cursor.blinking);
        assert_eq!(cursor.blinking_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_history_unlimited() {
        let mut history = History::default();
        assert!(load(&mut history, "{limit: -1}").is_empty());
        assert_eq!(history.limit, None);

        assert_eq!(load(&mut history, "{limit: -7}"), vec!["field.limit".to_string()]);
        assert_eq!(history.limit, None);

        assert!(load(&mut history, "{limit: 500}").is_empty());
        assert_eq!(history.limit, Some(500));
    }

    #[test]
    fn test_opacity_range_validated() {
        let mut background = Background::default();
        assert_eq!(
            load(&mut background, "{opacity: 1.5, blur: true}"),
            vec!["field.opacity".to_string()]
        );
        assert_eq!(background.opacity, 1.0);
        assert!(background.blur);
    }

    #[test]
    fn test_font_faces() {
        let mut fonts = FontConfig::default();
        let errors = load(
            &mut fonts,
            "{size: 14, regular: Iosevka, bold: {family: Iosevka, weight: extra_bold}, text_shaping: {engine: open_shaper}}",
        );
        // `open_shaper` is not a valid name; everything else still loads.
        assert_eq!(errors, vec!["field.text_shaping.engine".to_string()]);
        assert_eq!(fonts.size, 14.0);
        assert_eq!(fonts.regular.family, "Iosevka");
        assert_eq!(fonts.bold.weight, FontWeight::ExtraBold);
    }

    #[test]
    fn test_colors_single_and_dual() {
        let mut colors = ColorConfig::default();
        assert!(load(&mut colors, "gruvbox").is_empty());
        assert_eq!(colors, ColorConfig::Simple("gruvbox".to_string()));

        assert!(load(&mut colors, "{dark: nord}").is_empty());
        assert_eq!(
            colors,
            ColorConfig::Dual {
                light: "gruvbox".to_string(),
                dark: "nord".to_string()
            }
        );
    }

    #[test]
    fn test_colors_mapping_without_names_keeps_value() {
        let mut colors = ColorConfig::Simple("gruvbox".to_string());
        assert!(load(&mut colors, "{}").is_empty());
        assert!(load(&mut colors, "{bright: nord}").is_empty());
        assert_eq!(colors, ColorConfig::Simple("gruvbox".to_string()));
    }

    #[test]
    fn test_permissions() {
        let mut permissions = Permissions::default();
        assert!(load(&mut permissions, "{change_font: allow, capture_buffer: deny}").is_empty());
        assert_eq!(permissions.change_font, Permission::Allow);
        assert_eq!(permissions.capture_buffer, Permission::Deny);
        assert_eq!(permissions.display_host_writable_statusline, Permission::Ask);
    }
}
