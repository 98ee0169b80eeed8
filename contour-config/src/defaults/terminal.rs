//! Default values for terminal-behaviour settings.

use std::collections::BTreeMap;
use std::time::Duration;

/// Login shell of the current user, falling back to the platform shell.
pub fn shell_program() -> String {
    #[cfg(target_os = "windows")]
    {
        "powershell.exe".to_string()
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "/bin/sh".to_string())
    }
}

pub fn shell_environment() -> BTreeMap<String, String> {
    BTreeMap::from([("TERM".to_string(), "contour".to_string())])
}

pub fn history_limit() -> usize {
    8000
}

pub fn tab_width() -> u32 {
    8
}

pub fn scroll_multiplier() -> u32 {
    3
}

pub fn cursor_blink_interval() -> Duration {
    Duration::from_millis(500)
}

pub fn highlight_timeout() -> Duration {
    Duration::from_millis(100)
}

pub fn smooth_line_scrolling() -> Duration {
    Duration::from_millis(100)
}

pub fn vi_mode_scrolloff() -> u32 {
    8
}
