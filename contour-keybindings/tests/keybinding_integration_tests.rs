//! Integration tests for contour-keybindings.
//!
//! These tests exercise the full parse → insert → resolve pipeline across
//! the three binding channels, using only the public API.

use contour_keybindings::{
    Action, InputMappings, Key, MatchMode, MatchModes, ModeFlags, Modifiers, MouseButton, Trigger,
    parse_key_combo, parse_key_trigger, parse_modifiers, parse_mouse_button,
};

fn ctrl_shift() -> Modifiers {
    Modifiers::CONTROL | Modifiers::SHIFT
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn mappings_empty_on_new() {
    let mappings = InputMappings::new();
    assert!(mappings.is_empty());
    assert_eq!(mappings.len(), 0);
}

#[test]
fn same_trigger_twice_yields_one_binding() {
    let mut mappings = InputMappings::new();
    let trigger = parse_key_trigger("End").unwrap();
    mappings.add(trigger, Modifiers::SHIFT, MatchModes::any(), Action::ScrollToBottom);
    mappings.add(trigger, Modifiers::SHIFT, MatchModes::any(), Action::Quit);

    assert_eq!(mappings.key_mappings.len(), 1);
    assert_eq!(
        mappings.key_mappings[0].actions,
        vec![Action::ScrollToBottom, Action::Quit]
    );
}

#[test]
fn different_modifiers_make_separate_bindings() {
    let mut mappings = InputMappings::new();
    mappings.add(Trigger::Key(Key::Home), Modifiers::CONTROL, MatchModes::any(), Action::ScrollToTop);
    mappings.add(Trigger::Key(Key::Home), Modifiers::SHIFT, MatchModes::any(), Action::ScrollMarkUp);

    assert_eq!(mappings.key_mappings.len(), 2);
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn shift_control_minus_decreases_font_size() {
    let mut mappings = InputMappings::new();
    let mods = parse_modifiers(["Shift", "Control"]).unwrap();
    let trigger = parse_key_trigger("-").unwrap();
    mappings.add(trigger, mods, MatchModes::any(), Action::DecreaseFontSize);

    assert_eq!(
        mappings.resolve_char('-', ctrl_shift(), ModeFlags::empty()),
        Some(&[Action::DecreaseFontSize][..])
    );
    assert_eq!(
        mappings.resolve_char('-', Modifiers::CONTROL, ModeFlags::empty()),
        None
    );
}

#[test]
fn first_inserted_binding_wins_when_both_predicates_hold() {
    let mut mappings = InputMappings::new();
    let not_alt_screen = MatchModes::any().with(ModeFlags::ALTERNATE_SCREEN, MatchMode::Disabled);
    let not_trace = MatchModes::any().with(ModeFlags::TRACE, MatchMode::Disabled);
    mappings.add(Trigger::Key(Key::End), Modifiers::SHIFT, not_alt_screen, Action::ScrollToBottom);
    mappings.add(Trigger::Key(Key::End), Modifiers::SHIFT, not_trace, Action::Quit);

    assert_eq!(mappings.key_mappings.len(), 2);
    assert_eq!(
        mappings.resolve_key(Key::End, Modifiers::SHIFT, ModeFlags::empty()),
        Some(&[Action::ScrollToBottom][..])
    );
}

#[test]
fn mode_predicate_gates_binding() {
    let mut mappings = InputMappings::new();
    let select = MatchModes::parse("Select").unwrap();
    mappings.add(
        Trigger::Char('C'),
        ctrl_shift(),
        select,
        Action::CopySelection {
            format: Default::default(),
        },
    );

    assert!(mappings.resolve_char('C', ctrl_shift(), ModeFlags::empty()).is_none());
    assert!(mappings.resolve_char('C', ctrl_shift(), ModeFlags::SELECT).is_some());
    assert!(
        mappings
            .resolve_char('C', ctrl_shift(), ModeFlags::SELECT | ModeFlags::INSERT)
            .is_some()
    );
}

#[test]
fn disabled_mode_blocks_binding() {
    let mut mappings = InputMappings::new();
    let outside_alt = MatchModes::parse("~AlternateScreen").unwrap();
    mappings.add(
        Trigger::Mouse(parse_mouse_button("WheelUp").unwrap()),
        Modifiers::empty(),
        outside_alt,
        Action::ScrollUp,
    );

    assert!(
        mappings
            .resolve_mouse(MouseButton::WheelUp, Modifiers::empty(), ModeFlags::empty())
            .is_some()
    );
    assert!(
        mappings
            .resolve_mouse(MouseButton::WheelUp, Modifiers::empty(), ModeFlags::ALTERNATE_SCREEN)
            .is_none()
    );
}

#[test]
fn channels_are_independent() {
    let mut mappings = InputMappings::new();
    mappings.add(Trigger::Key(Key::Enter), Modifiers::ALT, MatchModes::any(), Action::ToggleFullscreen);

    // A character '\r' is not the named Enter key.
    assert!(mappings.resolve_char('\r', Modifiers::ALT, ModeFlags::empty()).is_none());
    assert!(mappings.resolve_key(Key::Enter, Modifiers::ALT, ModeFlags::empty()).is_some());
}

#[test]
fn combo_string_resolves_like_rule_fields() {
    let mut mappings = InputMappings::new();
    let (mods, trigger) = parse_key_combo("Control+Shift+T").unwrap();
    mappings.add(trigger, mods, MatchModes::any(), Action::CreateNewTab);

    assert_eq!(
        mappings.resolve(Trigger::Char('T'), ctrl_shift(), ModeFlags::empty()),
        Some(&[Action::CreateNewTab][..])
    );
}

#[test]
fn resolution_does_not_mutate_bindings() {
    let mut mappings = InputMappings::new();
    mappings.add(Trigger::Key(Key::PageUp), Modifiers::SHIFT, MatchModes::any(), Action::ScrollPageUp);
    let before = mappings.clone();

    for _ in 0..3 {
        let _ = mappings.resolve_key(Key::PageUp, Modifiers::SHIFT, ModeFlags::empty());
        let _ = mappings.resolve_key(Key::PageDown, Modifiers::SHIFT, ModeFlags::empty());
    }
    assert_eq!(mappings, before);
}
