//! Input name parsing.
//!
//! Parses the human-readable names used in the configuration document
//! ("Control", "PageUp", "WheelDown", '-') into [`Modifiers`], [`Key`],
//! [`MouseButton`] and [`Trigger`] values, and renders them back to their
//! canonical spelling.

use bitflags::bitflags;
use std::fmt;
use thiserror::Error;

/// Error type for input name parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown modifier: '{0}'")]
    UnknownModifier(String),
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
    #[error("Unknown mouse button: '{0}'")]
    UnknownMouseButton(String),
    #[error("Unknown mode flag: '{0}'")]
    UnknownMode(String),
    #[error("Empty key combination")]
    Empty,
    #[error("Key combination ends with modifier, no key specified")]
    MissingKey,
    #[error("Multiple keys specified: already have key, found '{0}'")]
    MultipleKeys(String),
}

bitflags! {
    /// Set of keyboard modifiers held during an input event.
    ///
    /// The empty set is the "None" modifier. Bindings compare modifier sets
    /// for exact equality.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const ALT = 1 << 1;
        const CONTROL = 1 << 2;
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Canonical modifier names in display order.
    const NAMES: [(Modifiers, &'static str); 4] = [
        (Modifiers::SHIFT, "Shift"),
        (Modifiers::ALT, "Alt"),
        (Modifiers::CONTROL, "Control"),
        (Modifiers::META, "Meta"),
    ];

    /// Canonical names of the modifiers in this set.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        write!(f, "{}", self.names().join("+"))
    }
}

/// Parse a single modifier name.
///
/// Accepts `Shift`, `Control`/`Ctrl`, `Alt`/`Option`, `Meta`/`Super`/`Cmd`/`Command`/`Win`
/// and `None` (case-insensitive).
pub fn parse_modifier(s: &str) -> Result<Modifiers, ParseError> {
    match s.trim().to_lowercase().as_str() {
        "none" => Ok(Modifiers::empty()),
        "shift" => Ok(Modifiers::SHIFT),
        "ctrl" | "control" => Ok(Modifiers::CONTROL),
        "alt" | "option" => Ok(Modifiers::ALT),
        "meta" | "super" | "cmd" | "command" | "win" => Ok(Modifiers::META),
        _ => Err(ParseError::UnknownModifier(s.to_string())),
    }
}

/// Parse a list of modifier names into a combined set.
pub fn parse_modifiers<'a, I>(names: I) -> Result<Modifiers, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .try_fold(Modifiers::empty(), |acc, name| Ok(acc | parse_modifier(name)?))
}

/// Named, non-character keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,

    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,

    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
    NumpadEqual,
}

impl Key {
    /// Canonical document name of this key.
    pub fn name(self) -> &'static str {
        match self {
            Key::Escape => "Escape",
            Key::Enter => "Enter",
            Key::Tab => "Tab",
            Key::Backspace => "Backspace",
            Key::UpArrow => "UpArrow",
            Key::DownArrow => "DownArrow",
            Key::LeftArrow => "LeftArrow",
            Key::RightArrow => "RightArrow",
            Key::Insert => "Insert",
            Key::Delete => "Delete",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::F13 => "F13",
            Key::F14 => "F14",
            Key::F15 => "F15",
            Key::F16 => "F16",
            Key::F17 => "F17",
            Key::F18 => "F18",
            Key::F19 => "F19",
            Key::F20 => "F20",
            Key::Numpad0 => "Numpad_0",
            Key::Numpad1 => "Numpad_1",
            Key::Numpad2 => "Numpad_2",
            Key::Numpad3 => "Numpad_3",
            Key::Numpad4 => "Numpad_4",
            Key::Numpad5 => "Numpad_5",
            Key::Numpad6 => "Numpad_6",
            Key::Numpad7 => "Numpad_7",
            Key::Numpad8 => "Numpad_8",
            Key::Numpad9 => "Numpad_9",
            Key::NumpadAdd => "Numpad_Add",
            Key::NumpadSubtract => "Numpad_Subtract",
            Key::NumpadMultiply => "Numpad_Multiply",
            Key::NumpadDivide => "Numpad_Divide",
            Key::NumpadDecimal => "Numpad_Decimal",
            Key::NumpadEnter => "Numpad_Enter",
            Key::NumpadEqual => "Numpad_Equal",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a named key string into a [`Key`] (case-insensitive, with aliases).
pub fn parse_named_key(s: &str) -> Option<Key> {
    let key = match s.to_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "tab" => Key::Tab,
        "backspace" => Key::Backspace,

        "uparrow" | "arrowup" | "up" => Key::UpArrow,
        "downarrow" | "arrowdown" | "down" => Key::DownArrow,
        "leftarrow" | "arrowleft" | "left" => Key::LeftArrow,
        "rightarrow" | "arrowright" | "right" => Key::RightArrow,
        "insert" | "ins" => Key::Insert,
        "delete" | "del" => Key::Delete,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdn" => Key::PageDown,

        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "f13" => Key::F13,
        "f14" => Key::F14,
        "f15" => Key::F15,
        "f16" => Key::F16,
        "f17" => Key::F17,
        "f18" => Key::F18,
        "f19" => Key::F19,
        "f20" => Key::F20,

        "numpad_0" => Key::Numpad0,
        "numpad_1" => Key::Numpad1,
        "numpad_2" => Key::Numpad2,
        "numpad_3" => Key::Numpad3,
        "numpad_4" => Key::Numpad4,
        "numpad_5" => Key::Numpad5,
        "numpad_6" => Key::Numpad6,
        "numpad_7" => Key::Numpad7,
        "numpad_8" => Key::Numpad8,
        "numpad_9" => Key::Numpad9,
        "numpad_add" => Key::NumpadAdd,
        "numpad_subtract" => Key::NumpadSubtract,
        "numpad_multiply" => Key::NumpadMultiply,
        "numpad_divide" => Key::NumpadDivide,
        "numpad_decimal" => Key::NumpadDecimal,
        "numpad_enter" => Key::NumpadEnter,
        "numpad_equal" => Key::NumpadEqual,

        _ => return None,
    };
    Some(key)
}

/// Mouse buttons and wheel directions that can trigger a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Release,
    WheelUp,
    WheelDown,
}

impl MouseButton {
    /// Canonical document name of this button.
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "Left",
            MouseButton::Middle => "Middle",
            MouseButton::Right => "Right",
            MouseButton::Release => "Release",
            MouseButton::WheelUp => "WheelUp",
            MouseButton::WheelDown => "WheelDown",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a mouse button name (case-insensitive).
pub fn parse_mouse_button(s: &str) -> Result<MouseButton, ParseError> {
    match s.trim().to_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "middle" => Ok(MouseButton::Middle),
        "right" => Ok(MouseButton::Right),
        "release" => Ok(MouseButton::Release),
        "wheelup" => Ok(MouseButton::WheelUp),
        "wheeldown" => Ok(MouseButton::WheelDown),
        _ => Err(ParseError::UnknownMouseButton(s.to_string())),
    }
}

/// The input half of a binding: which channel it belongs to and the value
/// that must be seen on that channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(Key),
    Char(char),
    Mouse(MouseButton),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Key(key) => write!(f, "{key}"),
            Trigger::Char(ch) => write!(f, "'{}'", ch.escape_default()),
            Trigger::Mouse(button) => write!(f, "Mouse{button}"),
        }
    }
}

/// Parse the `key:` value of an input mapping rule.
///
/// Named keys take precedence; anything else must be exactly one character
/// and becomes a character trigger.
pub fn parse_key_trigger(s: &str) -> Result<Trigger, ParseError> {
    if let Some(key) = parse_named_key(s) {
        return Ok(Trigger::Key(key));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(Trigger::Char(ch)),
        _ => Err(ParseError::UnknownKey(s.to_string())),
    }
}

/// Parse a combined key string such as `"Control+Shift+End"` or `"Alt+Enter"`.
///
/// The last `+`-separated part is the key; every part before it must be a
/// modifier. A literal `+` key is written as `"Control++"`.
pub fn parse_key_combo(s: &str) -> Result<(Modifiers, Trigger), ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let (mods_part, key_part) = match s.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None if s == "+" => ("", "+"),
        None => match s.rsplit_once('+') {
            Some((mods, key)) => (mods, key.trim()),
            None => ("", s),
        },
    };

    if key_part.is_empty() {
        return Err(ParseError::MissingKey);
    }

    let mut modifiers = Modifiers::empty();
    for part in mods_part.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match parse_modifier(part) {
            Ok(m) => modifiers |= m,
            Err(_) => return Err(ParseError::MultipleKeys(part.to_string())),
        }
    }

    if parse_modifier(key_part).is_ok() && key_part.chars().count() > 1 {
        return Err(ParseError::MissingKey);
    }

    Ok((modifiers, parse_key_trigger(key_part)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_aliases() {
        assert_eq!(parse_modifier("Control").unwrap(), Modifiers::CONTROL);
        assert_eq!(parse_modifier("ctrl").unwrap(), Modifiers::CONTROL);
        assert_eq!(parse_modifier("Option").unwrap(), Modifiers::ALT);
        assert_eq!(parse_modifier("Super").unwrap(), Modifiers::META);
        assert_eq!(parse_modifier("None").unwrap(), Modifiers::empty());
        assert!(parse_modifier("Hyper").is_err());
    }

    #[test]
    fn test_parse_modifiers_list() {
        let mods = parse_modifiers(["Control", "Shift"]).unwrap();
        assert_eq!(mods, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(mods.names(), vec!["Shift", "Control"]);
    }

    #[test]
    fn test_modifiers_display() {
        assert_eq!(Modifiers::empty().to_string(), "None");
        assert_eq!((Modifiers::CONTROL | Modifiers::ALT).to_string(), "Alt+Control");
    }

    #[test]
    fn test_named_key_aliases() {
        assert_eq!(parse_named_key("Return"), Some(Key::Enter));
        assert_eq!(parse_named_key("esc"), Some(Key::Escape));
        assert_eq!(parse_named_key("PgUp"), Some(Key::PageUp));
        assert_eq!(parse_named_key("up"), Some(Key::UpArrow));
        assert_eq!(parse_named_key("numpad_enter"), Some(Key::NumpadEnter));
        assert_eq!(parse_named_key("F21"), None);
    }

    #[test]
    fn test_key_name_roundtrip() {
        for key in [Key::Escape, Key::PageDown, Key::F17, Key::Numpad7, Key::NumpadEqual] {
            assert_eq!(parse_named_key(key.name()), Some(key));
        }
    }

    #[test]
    fn test_key_trigger_named_wins() {
        assert_eq!(parse_key_trigger("Enter").unwrap(), Trigger::Key(Key::Enter));
        assert_eq!(parse_key_trigger("-").unwrap(), Trigger::Char('-'));
        assert_eq!(parse_key_trigger("a").unwrap(), Trigger::Char('a'));
        assert!(parse_key_trigger("NotAKey").is_err());
        assert!(parse_key_trigger("").is_err());
    }

    #[test]
    fn test_mouse_button() {
        assert_eq!(parse_mouse_button("WheelUp").unwrap(), MouseButton::WheelUp);
        assert_eq!(parse_mouse_button("middle").unwrap(), MouseButton::Middle);
        assert!(parse_mouse_button("Button4").is_err());
    }

    #[test]
    fn test_key_combo() {
        let (mods, trigger) = parse_key_combo("Control+Shift+End").unwrap();
        assert_eq!(mods, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(trigger, Trigger::Key(Key::End));

        let (mods, trigger) = parse_key_combo("Ctrl+Shift+-").unwrap();
        assert_eq!(mods, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(trigger, Trigger::Char('-'));

        let (mods, trigger) = parse_key_combo("Control++").unwrap();
        assert_eq!(mods, Modifiers::CONTROL);
        assert_eq!(trigger, Trigger::Char('+'));

        let (mods, trigger) = parse_key_combo("F5").unwrap();
        assert!(mods.is_empty());
        assert_eq!(trigger, Trigger::Key(Key::F5));

        assert_eq!(
            parse_key_combo("+").unwrap(),
            (Modifiers::empty(), Trigger::Char('+'))
        );
    }

    #[test]
    fn test_key_combo_invalid() {
        assert_eq!(parse_key_combo(""), Err(ParseError::Empty));
        assert_eq!(parse_key_combo("Control+Shift"), Err(ParseError::MissingKey));
        assert!(parse_key_combo("A+B").is_err());
        assert!(parse_key_combo("Control+UnknownKey").is_err());
    }
}
