//! `input_mapping` loading.
//!
//! A rule is a mapping such as
//! `{ mods: [Control, Shift], key: "-", mode: "~Select", action: DecreaseFontSize }`.
//! The action and its parameters share the rule mapping, which is exactly
//! serde's internally tagged representation of [`Action`].

use super::value::FromNode;
use super::{LoadContext, Section};
use crate::config::Config;
use crate::error::FieldError;
use contour_keybindings::{
    Action, InputMappings, MatchModes, Modifiers, Trigger, parse_key_trigger, parse_modifiers,
    parse_mouse_button,
};
use serde_yaml_ng::{Mapping, Value};

/// A fully parsed input mapping rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rule {
    pub trigger: Trigger,
    pub modifiers: Modifiers,
    pub modes: MatchModes,
    pub action: Action,
}

/// Load `input_mapping`.
///
/// Without the key the built-in bindings stay; an explicit list (even an
/// empty one) replaces them. Rules that fail to parse are skipped.
pub(super) fn load_input_mappings(root: &Section<'_>, config: &mut Config, ctx: &mut LoadContext) {
    const PATH: &str = "input_mapping";

    let Some(node) = root.get(PATH) else {
        return;
    };

    let rules: &[Value] = match node {
        Value::Sequence(rules) => rules,
        Value::Null => &[],
        other => {
            ctx.report(PATH, FieldError::mismatch("a list of rules", other));
            return;
        }
    };

    let mut mappings = InputMappings::new();
    for (index, rule) in rules.iter().enumerate() {
        match parse_rule(rule) {
            Ok(rule) => mappings.add(rule.trigger, rule.modifiers, rule.modes, rule.action),
            Err(e) => ctx.report(&format!("{PATH}[{index}]"), e),
        }
    }
    config.input_mappings.set(mappings);
}

pub(crate) fn parse_rule(node: &Value) -> Result<Rule, FieldError> {
    let map = node
        .as_mapping()
        .ok_or_else(|| FieldError::mismatch("a mapping", node))?;

    let modifiers = parse_rule_modifiers(map)?;
    let trigger = parse_rule_trigger(map)?;
    let modes = match map.get("mode") {
        None | Some(Value::Null) => MatchModes::any(),
        Some(mode) => MatchModes::parse(&String::from_node(mode)?)?,
    };
    let action = serde_yaml_ng::from_value::<Action>(node.clone())
        .map_err(|e| FieldError::Invalid(format!("invalid action: {e}")))?;

    Ok(Rule {
        trigger,
        modifiers,
        modes,
        action,
    })
}

/// `mods` is a list of names; a single `Control|Shift` string is accepted too.
fn parse_rule_modifiers(map: &Mapping) -> Result<Modifiers, FieldError> {
    match map.get("mods") {
        None | Some(Value::Null) => Ok(Modifiers::empty()),
        Some(Value::Sequence(names)) => {
            let names = names
                .iter()
                .map(String::from_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parse_modifiers(names.iter().map(String::as_str))?)
        }
        Some(Value::String(names)) => Ok(parse_modifiers(
            names
                .split(['|', '+'])
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )?),
        Some(other) => Err(FieldError::mismatch("a list of modifier names", other)),
    }
}

fn parse_rule_trigger(map: &Mapping) -> Result<Trigger, FieldError> {
    match (map.get("key"), map.get("mouse")) {
        (Some(key), None) => Ok(parse_key_trigger(&String::from_node(key)?)?),
        (None, Some(button)) => Ok(Trigger::Mouse(parse_mouse_button(&String::from_node(
            button,
        )?)?)),
        (Some(_), Some(_)) => Err(FieldError::Invalid(
            "rule has both `key` and `mouse`".to_string(),
        )),
        (None, None) => Err(FieldError::Invalid(
            "rule needs either `key` or `mouse`".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load;
    use contour_keybindings::{CopyFormat, Key, MatchMode, ModeFlags, MouseButton};

    fn parse(text: &str) -> Result<Rule, FieldError> {
        parse_rule(&serde_yaml_ng::from_str(text).unwrap())
    }

    #[test]
    fn test_character_rule() {
        let rule = parse("{ mods: [Shift, Control], key: '-', action: DecreaseFontSize }").unwrap();
        assert_eq!(rule.trigger, Trigger::Char('-'));
        assert_eq!(rule.modifiers, Modifiers::SHIFT | Modifiers::CONTROL);
        assert!(rule.modes.is_any());
        assert_eq!(rule.action, Action::DecreaseFontSize);
    }

    #[test]
    fn test_named_key_with_mode_and_parameter() {
        let rule = parse(
            "{ mods: [Control, Shift], key: C, mode: \"Select|~Insert\", action: CopySelection, format: HTML }",
        )
        .unwrap();
        assert_eq!(rule.trigger, Trigger::Char('C'));
        assert_eq!(rule.modes.status(ModeFlags::SELECT), MatchMode::Enabled);
        assert_eq!(rule.modes.status(ModeFlags::INSERT), MatchMode::Disabled);
        assert_eq!(
            rule.action,
            Action::CopySelection {
                format: CopyFormat::HTML
            }
        );

        let rule = parse("{ key: F5, action: SwitchToTab, position: 5 }").unwrap();
        assert_eq!(rule.trigger, Trigger::Key(Key::F5));
        assert_eq!(rule.action, Action::SwitchToTab { position: 5 });
    }

    #[test]
    fn test_mouse_rule_and_string_mods() {
        let rule = parse("{ mods: Control, mouse: WheelUp, action: IncreaseFontSize }").unwrap();
        assert_eq!(rule.trigger, Trigger::Mouse(MouseButton::WheelUp));
        assert_eq!(rule.modifiers, Modifiers::CONTROL);
    }

    #[test]
    fn test_rule_errors() {
        assert!(parse("{ key: Enter }").is_err());
        assert!(parse("{ key: Enter, action: Explode }").is_err());
        assert!(parse("{ action: Quit }").is_err());
        assert!(parse("{ key: Enter, mouse: Left, action: Quit }").is_err());
        assert!(parse("{ mods: [Hyper], key: Enter, action: Quit }").is_err());
        assert!(parse("{ key: Enter, mode: Bogus, action: Quit }").is_err());
        assert!(parse("{ key: ab, action: Quit }").is_err());
        assert!(parse("{ key: Enter, action: SendChars }").is_err());
    }

    #[test]
    fn test_bad_rule_skipped_others_kept() {
        let doc = "\
input_mapping:
    - { mods: [Alt], key: Enter, action: ToggleFullscreen }
    - { mods: [Alt], key: Enter, action: NoSuchAction }
    - { mods: [Control], mouse: Left, action: FollowHyperlink }
";
        let (config, diagnostics) = load(doc);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.iter().next().unwrap().path, "input_mapping[1]");
        assert_eq!(config.input_mappings.len(), 2);
        assert_eq!(
            config.resolve_key(Key::Enter, Modifiers::ALT, ModeFlags::empty()),
            Some(&[Action::ToggleFullscreen][..])
        );
    }

    #[test]
    fn test_absent_list_keeps_defaults_empty_list_clears() {
        let (config, _) = load("live_config: true\n");
        assert_eq!(*config.input_mappings, crate::defaults::input_mappings());

        let (config, diagnostics) = load("input_mapping: []\n");
        assert!(diagnostics.is_empty());
        assert!(config.input_mappings.is_empty());
    }

    #[test]
    fn test_repeated_trigger_appends_actions() {
        let doc = "\
input_mapping:
    - { mods: [Control], key: Q, action: CreateDebugDump }
    - { mods: [Control], key: Q, action: Quit }
";
        let (config, _) = load(doc);
        assert_eq!(config.input_mappings.char_mappings.len(), 1);
        assert_eq!(
            config.resolve_char('Q', Modifiers::CONTROL, ModeFlags::empty()),
            Some(&[Action::CreateDebugDump, Action::Quit][..])
        );
    }
}
