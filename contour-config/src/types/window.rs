//! Window geometry and appearance types.

use crate::defaults;

/// Padding between the window border and the text area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowMargins {
    pub horizontal: u16,
    pub vertical: u16,
}

/// Initial terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize {
    pub columns: u16,
    pub lines: u16,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            columns: defaults::columns(),
            lines: defaults::lines(),
        }
    }
}

/// Window background settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Blur what is behind the window (platform permitting).
    pub blur: bool,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            blur: false,
        }
    }
}

/// Bell behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Bell {
    /// `default`, `off`, or a path to a sound file.
    pub sound: String,
    /// Raise a desktop alert when the bell rings in an unfocused window.
    pub alert: bool,
    /// Volume in `0.0..=1.0`.
    pub volume: f32,
}

impl Default for Bell {
    fn default() -> Self {
        Self {
            sound: "default".to_string(),
            alert: true,
            volume: 1.0,
        }
    }
}

impl Bell {
    pub fn is_muted(&self) -> bool {
        self.sound == "off" || self.volume <= 0.0
    }
}
