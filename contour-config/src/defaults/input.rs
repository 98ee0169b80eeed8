//! Default input mappings, used when the document has no `input_mapping` list.

use contour_keybindings::{
    Action, CopyFormat, InputMappings, Key, MatchMode, MatchModes, ModeFlags, Modifiers,
    MouseButton, Trigger,
};

pub fn input_mappings() -> InputMappings {
    let any = MatchModes::any();
    let select = MatchModes::any().with(ModeFlags::SELECT, MatchMode::Enabled);
    let ctrl_shift = Modifiers::CONTROL | Modifiers::SHIFT;
    let none = Modifiers::empty();

    let key = Trigger::Key;
    let ch = Trigger::Char;
    let mouse = Trigger::Mouse;

    let bindings: Vec<(Trigger, Modifiers, MatchModes, Action)> = vec![
        (key(Key::Enter), Modifiers::ALT, any, Action::ToggleFullscreen),
        (ch('='), ctrl_shift, any, Action::IncreaseFontSize),
        (ch('-'), ctrl_shift, any, Action::DecreaseFontSize),
        (ch('0'), Modifiers::CONTROL, any, Action::ResetFontSize),
        (mouse(MouseButton::WheelUp), Modifiers::CONTROL, any, Action::IncreaseFontSize),
        (mouse(MouseButton::WheelDown), Modifiers::CONTROL, any, Action::DecreaseFontSize),
        (mouse(MouseButton::WheelUp), Modifiers::ALT, any, Action::IncreaseOpacity),
        (mouse(MouseButton::WheelDown), Modifiers::ALT, any, Action::DecreaseOpacity),
        (mouse(MouseButton::WheelUp), none, any, Action::ScrollUp),
        (mouse(MouseButton::WheelDown), none, any, Action::ScrollDown),
        (mouse(MouseButton::WheelUp), Modifiers::SHIFT, any, Action::ScrollPageUp),
        (mouse(MouseButton::WheelDown), Modifiers::SHIFT, any, Action::ScrollPageDown),
        (mouse(MouseButton::Middle), none, any, Action::PasteSelection { strip: false }),
        (key(Key::PageUp), Modifiers::SHIFT, any, Action::ScrollPageUp),
        (key(Key::PageDown), Modifiers::SHIFT, any, Action::ScrollPageDown),
        (key(Key::Home), Modifiers::CONTROL, any, Action::ScrollToTop),
        (key(Key::End), Modifiers::CONTROL, any, Action::ScrollToBottom),
        (key(Key::Escape), none, select, Action::CancelSelection),
        (key(Key::LeftArrow), ctrl_shift, any, Action::SwitchToTabLeft),
        (key(Key::RightArrow), ctrl_shift, any, Action::SwitchToTabRight),
        (key(Key::F5), ctrl_shift, any, Action::ReloadConfig { profile: None }),
        (ch('V'), ctrl_shift, any, Action::PasteClipboard { strip: false }),
        (
            ch('C'),
            ctrl_shift,
            select,
            Action::CopySelection {
                format: CopyFormat::Text,
            },
        ),
        (ch('T'), ctrl_shift, any, Action::CreateNewTab),
        (ch('W'), ctrl_shift, any, Action::CloseTab),
        (ch('Q'), ctrl_shift, any, Action::Quit),
        (ch(','), ctrl_shift, any, Action::OpenConfiguration),
    ];

    let mut mappings = InputMappings::new();
    for (trigger, modifiers, modes, action) in bindings {
        mappings.add(trigger, modifiers, modes, action);
    }
    mappings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_channel() {
        let mappings = input_mappings();
        assert!(!mappings.key_mappings.is_empty());
        assert!(!mappings.char_mappings.is_empty());
        assert!(!mappings.mouse_mappings.is_empty());
    }

    #[test]
    fn test_alt_enter_toggles_fullscreen() {
        let mappings = input_mappings();
        assert_eq!(
            mappings.resolve_key(Key::Enter, Modifiers::ALT, ModeFlags::empty()),
            Some(&[Action::ToggleFullscreen][..])
        );
    }

    #[test]
    fn test_copy_needs_selection() {
        let mappings = input_mappings();
        let mods = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(mappings.resolve_char('C', mods, ModeFlags::empty()).is_none());
        assert!(mappings.resolve_char('C', mods, ModeFlags::SELECT).is_some());
    }

    #[test]
    fn test_wheel_modifiers_are_distinct() {
        let mappings = input_mappings();
        assert_eq!(
            mappings.resolve_mouse(MouseButton::WheelUp, Modifiers::empty(), ModeFlags::empty()),
            Some(&[Action::ScrollUp][..])
        );
        assert_eq!(
            mappings.resolve_mouse(MouseButton::WheelUp, Modifiers::CONTROL, ModeFlags::empty()),
            Some(&[Action::IncreaseFontSize][..])
        );
    }
}
