//! Application actions that bindings resolve to.
//!
//! Actions are plain values: this crate defines their shape, the session and
//! GUI layers execute them. In the configuration document an action is
//! written as `action: Name` with any parameters as sibling keys of the same
//! rule, which is exactly serde's internally tagged representation.

use serde::{Deserialize, Serialize};
use std::fmt;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Clipboard format used by [`Action::CopySelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CopyFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Text including SGR escape sequences
    VT,
    /// HTML with inline styles
    HTML,
    /// Rendered image of the selection
    PNG,
}

impl CopyFormat {
    fn is_default(&self) -> bool {
        *self == CopyFormat::Text
    }
}

/// A command the application executes in response to resolved input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    CancelSelection,
    ChangeProfile {
        name: String,
    },
    ClearHistoryAndReset,
    CloseTab,
    CopyPreviousMarkRange,
    CopySelection {
        #[serde(default, skip_serializing_if = "CopyFormat::is_default")]
        format: CopyFormat,
    },
    CreateDebugDump,
    CreateNewTab,
    CreateSelection {
        delimiters: String,
    },
    DecreaseFontSize,
    DecreaseOpacity,
    FocusNextSearchMatch,
    FocusPreviousSearchMatch,
    FollowHyperlink,
    IncreaseFontSize,
    IncreaseOpacity,
    MoveTabToLeft,
    MoveTabToRight,
    NewTerminal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile: Option<String>,
    },
    NoSearchHighlight,
    OpenConfiguration,
    OpenFileManager,
    OpenSelection,
    PasteClipboard {
        #[serde(default, skip_serializing_if = "is_false")]
        strip: bool,
    },
    PasteSelection {
        #[serde(default, skip_serializing_if = "is_false")]
        strip: bool,
    },
    Quit,
    ReloadConfig {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile: Option<String>,
    },
    ResetConfig,
    ResetFontSize,
    ScreenshotVT,
    ScrollDown,
    ScrollMarkDown,
    ScrollMarkUp,
    ScrollOneDown,
    ScrollOneUp,
    ScrollPageDown,
    ScrollPageUp,
    ScrollToBottom,
    ScrollToTop,
    ScrollUp,
    SearchReverse,
    SendChars {
        chars: String,
    },
    SwitchToPreviousTab,
    /// Switch to the tab at a 1-based position.
    SwitchToTab {
        position: usize,
    },
    SwitchToTabLeft,
    SwitchToTabRight,
    ToggleAllKeyMaps,
    ToggleFullscreen,
    ToggleInputProtection,
    ToggleStatusLine,
    ToggleTitleBar,
    TraceBreakAtEmptyQueue,
    TraceEnter,
    TraceLeave,
    TraceStep,
    ViNormalMode,
    WriteScreen {
        chars: String,
    },
}

impl Action {
    /// The action's document name (the value of the `action:` key).
    pub fn name(&self) -> &'static str {
        match self {
            Action::CancelSelection => "CancelSelection",
            Action::ChangeProfile { .. } => "ChangeProfile",
            Action::ClearHistoryAndReset => "ClearHistoryAndReset",
            Action::CloseTab => "CloseTab",
            Action::CopyPreviousMarkRange => "CopyPreviousMarkRange",
            Action::CopySelection { .. } => "CopySelection",
            Action::CreateDebugDump => "CreateDebugDump",
            Action::CreateNewTab => "CreateNewTab",
            Action::CreateSelection { .. } => "CreateSelection",
            Action::DecreaseFontSize => "DecreaseFontSize",
            Action::DecreaseOpacity => "DecreaseOpacity",
            Action::FocusNextSearchMatch => "FocusNextSearchMatch",
            Action::FocusPreviousSearchMatch => "FocusPreviousSearchMatch",
            Action::FollowHyperlink => "FollowHyperlink",
            Action::IncreaseFontSize => "IncreaseFontSize",
            Action::IncreaseOpacity => "IncreaseOpacity",
            Action::MoveTabToLeft => "MoveTabToLeft",
            Action::MoveTabToRight => "MoveTabToRight",
            Action::NewTerminal { .. } => "NewTerminal",
            Action::NoSearchHighlight => "NoSearchHighlight",
            Action::OpenConfiguration => "OpenConfiguration",
            Action::OpenFileManager => "OpenFileManager",
            Action::OpenSelection => "OpenSelection",
            Action::PasteClipboard { .. } => "PasteClipboard",
            Action::PasteSelection { .. } => "PasteSelection",
            Action::Quit => "Quit",
            Action::ReloadConfig { .. } => "ReloadConfig",
            Action::ResetConfig => "ResetConfig",
            Action::ResetFontSize => "ResetFontSize",
            Action::ScreenshotVT => "ScreenshotVT",
            Action::ScrollDown => "ScrollDown",
            Action::ScrollMarkDown => "ScrollMarkDown",
            Action::ScrollMarkUp => "ScrollMarkUp",
            Action::ScrollOneDown => "ScrollOneDown",
            Action::ScrollOneUp => "ScrollOneUp",
            Action::ScrollPageDown => "ScrollPageDown",
            Action::ScrollPageUp => "ScrollPageUp",
            Action::ScrollToBottom => "ScrollToBottom",
            Action::ScrollToTop => "ScrollToTop",
            Action::ScrollUp => "ScrollUp",
            Action::SearchReverse => "SearchReverse",
            Action::SendChars { .. } => "SendChars",
            Action::SwitchToPreviousTab => "SwitchToPreviousTab",
            Action::SwitchToTab { .. } => "SwitchToTab",
            Action::SwitchToTabLeft => "SwitchToTabLeft",
            Action::SwitchToTabRight => "SwitchToTabRight",
            Action::ToggleAllKeyMaps => "ToggleAllKeyMaps",
            Action::ToggleFullscreen => "ToggleFullscreen",
            Action::ToggleInputProtection => "ToggleInputProtection",
            Action::ToggleStatusLine => "ToggleStatusLine",
            Action::ToggleTitleBar => "ToggleTitleBar",
            Action::TraceBreakAtEmptyQueue => "TraceBreakAtEmptyQueue",
            Action::TraceEnter => "TraceEnter",
            Action::TraceLeave => "TraceLeave",
            Action::TraceStep => "TraceStep",
            Action::ViNormalMode => "ViNormalMode",
            Action::WriteScreen { .. } => "WriteScreen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ChangeProfile { name } => write!(f, "ChangeProfile({name})"),
            Action::SendChars { chars } | Action::WriteScreen { chars } => {
                write!(f, "{}({:?})", self.name(), chars)
            }
            Action::SwitchToTab { position } => write!(f, "SwitchToTab({position})"),
            Action::PasteClipboard { strip: true } | Action::PasteSelection { strip: true } => {
                write!(f, "{}(strip)", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_action_from_rule_with_extra_keys() {
        let rule: serde_json::Value = serde_json::json!({
            "mods": ["Control"],
            "key": "Home",
            "action": "ScrollToTop",
        });
        let action: Action = serde_json::from_value(rule).unwrap();
        assert_eq!(action, Action::ScrollToTop);
    }

    #[test]
    fn test_payload_action() {
        let rule = serde_json::json!({ "action": "SwitchToTab", "position": 3 });
        let action: Action = serde_json::from_value(rule).unwrap();
        assert_eq!(action, Action::SwitchToTab { position: 3 });
    }

    #[test]
    fn test_optional_payload_defaults() {
        let rule = serde_json::json!({ "action": "PasteClipboard" });
        let action: Action = serde_json::from_value(rule).unwrap();
        assert_eq!(action, Action::PasteClipboard { strip: false });

        let rule = serde_json::json!({ "action": "NewTerminal" });
        let action: Action = serde_json::from_value(rule).unwrap();
        assert_eq!(action, Action::NewTerminal { profile: None });
    }

    #[test]
    fn test_missing_required_payload_is_error() {
        let rule = serde_json::json!({ "action": "SendChars" });
        assert!(serde_json::from_value::<Action>(rule).is_err());
    }

    #[test]
    fn test_unknown_action_is_error() {
        let rule = serde_json::json!({ "action": "MakeCoffee" });
        assert!(serde_json::from_value::<Action>(rule).is_err());
    }

    #[test]
    fn test_serialize_skips_default_params() {
        let value = serde_json::to_value(Action::PasteClipboard { strip: false }).unwrap();
        assert_eq!(value, serde_json::json!({ "action": "PasteClipboard" }));

        let value = serde_json::to_value(Action::CopySelection {
            format: CopyFormat::HTML,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "action": "CopySelection", "format": "HTML" })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Quit.to_string(), "Quit");
        assert_eq!(
            Action::SwitchToTab { position: 2 }.to_string(),
            "SwitchToTab(2)"
        );
        assert_eq!(
            Action::PasteClipboard { strip: true }.to_string(),
            "PasteClipboard(strip)"
        );
    }
}
