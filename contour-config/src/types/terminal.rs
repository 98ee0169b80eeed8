//! Terminal behavior configuration types: emulated terminal, cursor, history,
//! scrollbar, status line and host permissions.

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Terminal Identity
// ============================================================================

/// Terminal model reported to applications (DA1/DA2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TerminalId {
    Vt100,
    Vt220,
    Vt240,
    Vt320,
    Vt330,
    Vt340,
    Vt420,
    Vt510,
    Vt520,
    #[default]
    Vt525,
}

/// Whether the Option key on macOS acts as Alt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionAsAlt {
    #[default]
    None,
    Left,
    Right,
    Both,
}

// ============================================================================
// Permissions
// ============================================================================

/// Answer to a privileged request from the application running in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Deny,
    Allow,
    /// Ask the user each time
    #[default]
    Ask,
}

/// Permissions for VT sequences that reach outside the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Permissions {
    /// Reading the screen buffer back into the application.
    pub capture_buffer: Permission,
    /// Changing the font via OSC 50.
    pub change_font: Permission,
    /// Showing the host-writable status line.
    pub display_host_writable_statusline: Permission,
}

// ============================================================================
// Cursor
// ============================================================================

/// Cursor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    /// Filled cell
    #[default]
    Block,
    /// Hollow cell outline
    Rectangle,
    /// Line below the baseline
    Underscore,
    /// Vertical line at the left edge of the cell
    Bar,
}

/// Cursor appearance for one input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorConfig {
    pub shape: CursorShape,
    pub blinking: bool,
    pub blinking_interval: Duration,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            shape: CursorShape::Block,
            blinking: false,
            blinking_interval: defaults::cursor_blink_interval(),
        }
    }
}

impl CursorConfig {
    pub fn new(shape: CursorShape, blinking: bool) -> Self {
        Self {
            shape,
            blinking,
            ..Default::default()
        }
    }
}

// ============================================================================
// History & Scrollbar
// ============================================================================

/// Scrollback settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct History {
    /// Maximum number of scrollback lines; `None` is unlimited (`-1` in the document).
    pub limit: Option<usize>,
    /// Jump to the bottom when new output arrives.
    pub auto_scroll_on_update: bool,
    /// Lines scrolled per wheel step.
    pub scroll_multiplier: u32,
}

impl Default for History {
    fn default() -> Self {
        Self {
            limit: Some(defaults::history_limit()),
            auto_scroll_on_update: true,
            scroll_multiplier: defaults::scroll_multiplier(),
        }
    }
}

/// Scrollbar placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBarPosition {
    Hidden,
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scrollbar {
    pub position: ScrollBarPosition,
    /// Hide the scrollbar while the alternate screen is active.
    pub hide_in_alt_screen: bool,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self {
            position: ScrollBarPosition::Right,
            hide_in_alt_screen: true,
        }
    }
}

// ============================================================================
// Status Line
// ============================================================================

/// What the status line shows initially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusDisplayType {
    #[default]
    None,
    Indicator,
    HostWritable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusDisplayPosition {
    #[default]
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusLine {
    pub display: StatusDisplayType,
    pub position: StatusDisplayPosition,
    /// Mirror the window title into the indicator status line.
    pub sync_window_title: bool,
}
