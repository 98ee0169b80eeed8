//! Writers for profiles, color schemes and input mapping rules.

use super::{DocumentWriter, WriteValue, plain_or_quoted, quote};
use crate::profile::TerminalProfile;
use crate::types::ColorPalette;
use contour_keybindings::{Action, InputBinding, InputMappings};
use serde_yaml_ng::Value;
use std::collections::BTreeMap;

impl WriteValue for TerminalProfile {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        w.entry("shell", &self.shell);
        w.entry("ssh", &self.ssh);
        w.entry("maximized", &self.maximized);
        w.entry("fullscreen", &self.fullscreen);
        w.entry("show_title_bar", &self.show_title_bar);
        w.entry("size_indicator_on_resize", &self.size_indicator_on_resize);
        w.entry("mouse_hide_while_typing", &self.mouse_hide_while_typing);
        w.entry("wm_class", &self.wm_class);
        w.entry("margins", &self.margins);
        w.entry("terminal_id", &self.terminal_id);
        w.entry("terminal_size", &self.terminal_size);
        w.entry("tab_width", &self.tab_width);
        w.entry("history", &self.history);
        w.entry("scrollbar", &self.scrollbar);
        w.entry("option_as_alt", &self.option_as_alt);
        w.entry("permissions", &self.permissions);
        w.entry("fonts", &self.fonts);
        w.entry(
            "draw_bold_text_with_bright_colors",
            &self.draw_bold_text_with_bright_colors,
        );
        w.entry("colors", &self.colors);
        w.entry("normal_mode", &self.normal_mode);
        w.entry("insert_mode", &self.insert_mode);
        w.entry("visual_mode", &self.visual_mode);
        w.entry("status_line", &self.status_line);
        w.entry("background", &self.background);
        w.entry("bell", &self.bell);
        w.entry("highlight_timeout", &self.highlight_timeout);
        w.entry("vi_mode_scrolloff", &self.vi_mode_scrolloff);
        w.entry("smooth_line_scrolling", &self.smooth_line_scrolling);
    }
}

impl WriteValue for BTreeMap<String, TerminalProfile> {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        for (name, profile) in self {
            profile.write_value(name, &mut w);
        }
    }
}

impl WriteValue for BTreeMap<String, ColorPalette> {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        let mut w = w.section(key);
        for (name, palette) in self {
            palette.write_value(name, &mut w);
        }
    }
}

// ============================================================================
// Input Mapping
// ============================================================================

/// Render a parameter value in flow style.
pub(crate) fn render_flow(value: &Value) -> String {
    match value {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render_flow).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_flow(k), render_flow(v)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
        Value::Tagged(tagged) => render_flow(&tagged.value),
    }
}

/// The `action: Name` pair followed by the action's parameters.
fn action_fields(action: &Action) -> Vec<String> {
    let Ok(Value::Mapping(map)) = serde_yaml_ng::to_value(action) else {
        return vec![format!("action: {}", action.name())];
    };
    map.iter()
        .map(|(k, v)| match (k.as_str(), v) {
            (Some("action"), Value::String(name)) => format!("action: {}", plain_or_quoted(name)),
            (Some(k), v) => format!("{}: {}", plain_or_quoted(k), render_flow(v)),
            (None, v) => format!("{}: {}", render_flow(k), render_flow(v)),
        })
        .collect()
}

/// One flow-mapping rule line per action of the binding.
fn write_binding<I>(
    w: &mut DocumentWriter,
    binding: &InputBinding<I>,
    trigger_key: &str,
    trigger: &str,
) {
    let mods: Vec<&str> = binding.modifiers.names();
    let mut head = vec![
        format!("mods: [{}]", mods.join(", ")),
        format!("{trigger_key}: {}", quote(trigger)),
    ];
    if !binding.modes.is_any() {
        head.push(format!("mode: {}", quote(&binding.modes.to_string())));
    }

    for action in &binding.actions {
        let mut fields = head.clone();
        fields.extend(action_fields(action));
        w.line(&format!("- {{ {} }}", fields.join(", ")));
    }
}

impl WriteValue for InputMappings {
    fn write_value(&self, key: &str, w: &mut DocumentWriter) {
        if self.is_empty() {
            w.scalar(key, "[]");
            return;
        }
        w.line(&format!("{key}:"));
        let mut w = w.indent();
        for binding in &self.key_mappings {
            write_binding(&mut w, binding, "key", binding.input.name());
        }
        for binding in &self.char_mappings {
            write_binding(&mut w, binding, "key", &binding.input.to_string());
        }
        for binding in &self.mouse_mappings {
            write_binding(&mut w, binding, "mouse", binding.input.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load;
    use crate::writer::serialize;
    use crate::config::Config;
    use contour_keybindings::{CopyFormat, MatchMode, MatchModes, ModeFlags, Modifiers, Trigger};

    fn written(mappings: &InputMappings) -> String {
        let mut w = DocumentWriter::new();
        mappings.write_value("input_mapping", &mut w);
        w.finish()
    }

    #[test]
    fn test_rule_line_format() {
        let mut mappings = InputMappings::new();
        mappings.add(
            Trigger::Char('C'),
            Modifiers::CONTROL | Modifiers::SHIFT,
            MatchModes::any().with(ModeFlags::SELECT, MatchMode::Enabled),
            Action::CopySelection {
                format: CopyFormat::HTML,
            },
        );
        assert_eq!(
            written(&mappings),
            "input_mapping:\n    - { mods: [Shift, Control], key: \"C\", mode: \"Select\", action: CopySelection, format: \"HTML\" }\n"
        );
    }

    #[test]
    fn test_empty_mappings() {
        assert_eq!(written(&InputMappings::new()), "input_mapping: []\n");
    }

    #[test]
    fn test_appended_actions_round_trip() {
        let mut config = Config::default();
        let mut mappings = InputMappings::new();
        for action in [Action::CreateDebugDump, Action::Quit] {
            mappings.add(
                Trigger::Char('Q'),
                Modifiers::CONTROL,
                MatchModes::any(),
                action,
            );
        }
        mappings.add(
            Trigger::Char('"'),
            Modifiers::empty(),
            MatchModes::any(),
            Action::SendChars {
                chars: "\u{1b}[A".to_string(),
            },
        );
        config.input_mappings.set(mappings);

        let (loaded, diagnostics) = load(&serialize(&config));
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(*loaded.input_mappings, *config.input_mappings);
    }

    #[test]
    fn test_render_flow() {
        let value: Value = serde_yaml_ng::from_str("{a: [1, true, ~], b: \"x y\"}").unwrap();
        assert_eq!(render_flow(&value), "{ \"a\": [1, true, ~], \"b\": \"x y\" }");
    }
}
