mod common;

use common::{load_clean, load_with_paths};
use contour::keybindings::{
    Action, InputMappings, Key, MatchMode, MatchModes, ModeFlags, Modifiers, MouseButton, Trigger,
};

#[test]
fn test_shift_control_minus() {
    let config = load_clean(
        "input_mapping:\n    - { mods: [Shift, Control], key: '-', action: DecreaseFontSize }\n",
    );
    assert_eq!(
        config.resolve_char('-', Modifiers::SHIFT | Modifiers::CONTROL, ModeFlags::empty()),
        Some(&[Action::DecreaseFontSize][..])
    );
    assert_eq!(
        config.resolve_char('-', Modifiers::CONTROL, ModeFlags::empty()),
        None
    );
}

#[test]
fn test_first_structural_match_wins() {
    let config = load_clean(
        "\
input_mapping:
    - { mods: [Shift], key: End, mode: Select, action: ScrollToBottom }
    - { mods: [Shift], key: End, mode: ~Insert, action: Quit }
",
    );
    assert_eq!(
        config.resolve_key(Key::End, Modifiers::SHIFT, ModeFlags::SELECT),
        Some(&[Action::ScrollToBottom][..])
    );
    assert_eq!(
        config.resolve_key(Key::End, Modifiers::SHIFT, ModeFlags::empty()),
        Some(&[Action::Quit][..])
    );
    assert_eq!(
        config.resolve_key(Key::End, Modifiers::SHIFT, ModeFlags::INSERT),
        None
    );
}

#[test]
fn test_same_trigger_accumulates_actions() {
    let mut mappings = InputMappings::new();
    let modes = MatchModes::any().with(ModeFlags::SELECT, MatchMode::Enabled);
    mappings.add(Trigger::Char('C'), Modifiers::CONTROL, modes, Action::CopySelection {
        format: Default::default(),
    });
    mappings.add(Trigger::Char('C'), Modifiers::CONTROL, modes, Action::CancelSelection);

    assert_eq!(mappings.char_mappings.len(), 1);
    assert_eq!(
        mappings.resolve_char('C', Modifiers::CONTROL, ModeFlags::SELECT),
        Some(
            &[
                Action::CopySelection {
                    format: Default::default()
                },
                Action::CancelSelection
            ][..]
        )
    );
}

#[test]
fn test_modifiers_must_match_exactly() {
    let config = load_clean(
        "input_mapping:\n    - { mods: [Control], mouse: WheelUp, action: IncreaseFontSize }\n",
    );
    assert!(
        config
            .resolve_mouse(MouseButton::WheelUp, Modifiers::CONTROL, ModeFlags::empty())
            .is_some()
    );
    assert!(
        config
            .resolve_mouse(
                MouseButton::WheelUp,
                Modifiers::CONTROL | Modifiers::SHIFT,
                ModeFlags::empty()
            )
            .is_none()
    );
    assert!(
        config
            .resolve_mouse(MouseButton::WheelUp, Modifiers::empty(), ModeFlags::empty())
            .is_none()
    );
}

#[test]
fn test_channels_are_independent() {
    let config = load_clean(
        "\
input_mapping:
    - { mods: [Alt], key: Enter, action: ToggleFullscreen }
    - { mods: [Alt], key: E, action: OpenFileManager }
",
    );
    assert_eq!(
        config.resolve_char('E', Modifiers::ALT, ModeFlags::empty()),
        Some(&[Action::OpenFileManager][..])
    );
    assert_eq!(
        config.resolve_key(Key::Enter, Modifiers::ALT, ModeFlags::empty()),
        Some(&[Action::ToggleFullscreen][..])
    );
}

#[test]
fn test_parameterised_actions() {
    let config = load_clean(
        "\
input_mapping:
    - { mods: [Control, Shift], key: N, action: NewTerminal, profile: work }
    - { mods: [Alt], key: '1', action: SwitchToTab, position: 1 }
    - { mods: [Control], key: F1, action: SendChars, chars: \"\\x1b[OP\" }
",
    );
    assert_eq!(
        config.resolve_char('N', Modifiers::CONTROL | Modifiers::SHIFT, ModeFlags::empty()),
        Some(
            &[Action::NewTerminal {
                profile: Some("work".to_string())
            }][..]
        )
    );
    assert_eq!(
        config.resolve_char('1', Modifiers::ALT, ModeFlags::empty()),
        Some(&[Action::SwitchToTab { position: 1 }][..])
    );
    assert_eq!(
        config.resolve_key(Key::F1, Modifiers::CONTROL, ModeFlags::empty()),
        Some(
            &[Action::SendChars {
                chars: "\u{1b}[OP".to_string()
            }][..]
        )
    );
}

#[test]
fn test_bad_rules_dropped_with_index_paths() {
    let (config, paths) = load_with_paths(
        "\
input_mapping:
    - { mods: [Alt], key: Enter, action: ToggleFullscreen }
    - { mods: [Hyper], key: Enter, action: Quit }
    - not a rule
    - { key: Enter, action: Quit, mode: Sideways }
    - { mouse: Middle, action: PasteSelection }
",
    );
    assert_eq!(
        paths,
        vec![
            "input_mapping[1]".to_string(),
            "input_mapping[2]".to_string(),
            "input_mapping[3]".to_string(),
        ]
    );
    assert_eq!(config.input_mappings.len(), 2);
}

#[test]
fn test_default_bindings_present() {
    let config = contour::config::Config::default();
    assert_eq!(
        config.resolve_char('V', Modifiers::CONTROL | Modifiers::SHIFT, ModeFlags::empty()),
        Some(&[Action::PasteClipboard { strip: false }][..])
    );
    assert!(
        config
            .resolve_mouse(MouseButton::Middle, Modifiers::empty(), ModeFlags::empty())
            .is_some()
    );
}
