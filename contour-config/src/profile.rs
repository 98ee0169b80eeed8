//! Terminal profiles.
//!
//! A profile bundles everything that can differ between terminal sessions:
//! the launched program, window behavior, fonts, colors, cursor and scrollback.
//! Profiles other than the default one are created as copies of the default
//! profile, so a profile document only needs to list what it changes.

use crate::defaults;
use crate::docs;
use crate::entry::ConfigEntry;
use crate::types::{
    Background, Bell, ColorConfig, CursorConfig, CursorShape, ExecutionProgram, FontConfig,
    History, OptionAsAlt, PageSize, Permissions, Scrollbar, SshHost, StatusLine, TerminalId,
    WindowMargins,
};
use std::time::Duration;

/// A named bundle of terminal settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalProfile {
    pub shell: ConfigEntry<ExecutionProgram>,
    pub ssh: ConfigEntry<SshHost>,
    pub maximized: ConfigEntry<bool>,
    pub fullscreen: ConfigEntry<bool>,
    pub show_title_bar: ConfigEntry<bool>,
    pub size_indicator_on_resize: ConfigEntry<bool>,
    pub mouse_hide_while_typing: ConfigEntry<bool>,
    pub wm_class: ConfigEntry<String>,
    pub margins: ConfigEntry<WindowMargins>,
    pub terminal_id: ConfigEntry<TerminalId>,
    pub terminal_size: ConfigEntry<PageSize>,
    pub tab_width: ConfigEntry<u32>,
    pub history: ConfigEntry<History>,
    pub scrollbar: ConfigEntry<Scrollbar>,
    pub option_as_alt: ConfigEntry<OptionAsAlt>,
    pub permissions: ConfigEntry<Permissions>,
    pub fonts: ConfigEntry<FontConfig>,
    pub draw_bold_text_with_bright_colors: ConfigEntry<bool>,
    pub colors: ConfigEntry<ColorConfig>,
    pub normal_mode: ConfigEntry<CursorConfig>,
    pub insert_mode: ConfigEntry<CursorConfig>,
    pub visual_mode: ConfigEntry<CursorConfig>,
    pub status_line: ConfigEntry<StatusLine>,
    pub background: ConfigEntry<Background>,
    pub bell: ConfigEntry<Bell>,
    pub highlight_timeout: ConfigEntry<Duration>,
    pub vi_mode_scrolloff: ConfigEntry<u32>,
    pub smooth_line_scrolling: ConfigEntry<Duration>,
}

impl Default for TerminalProfile {
    fn default() -> Self {
        Self {
            shell: ConfigEntry::with_default(docs::SHELL),
            ssh: ConfigEntry::with_default(docs::SSH),
            maximized: ConfigEntry::new(false, docs::MAXIMIZED),
            fullscreen: ConfigEntry::new(false, docs::FULLSCREEN),
            show_title_bar: ConfigEntry::new(true, docs::SHOW_TITLE_BAR),
            size_indicator_on_resize: ConfigEntry::new(true, docs::SIZE_INDICATOR_ON_RESIZE),
            mouse_hide_while_typing: ConfigEntry::new(true, docs::MOUSE_HIDE_WHILE_TYPING),
            wm_class: ConfigEntry::new(defaults::wm_class(), docs::WM_CLASS),
            margins: ConfigEntry::with_default(docs::MARGINS),
            terminal_id: ConfigEntry::with_default(docs::TERMINAL_ID),
            terminal_size: ConfigEntry::with_default(docs::TERMINAL_SIZE),
            tab_width: ConfigEntry::new(defaults::tab_width(), docs::TAB_WIDTH),
            history: ConfigEntry::with_default(docs::HISTORY),
            scrollbar: ConfigEntry::with_default(docs::SCROLLBAR),
            option_as_alt: ConfigEntry::with_default(docs::OPTION_AS_ALT),
            permissions: ConfigEntry::with_default(docs::PERMISSIONS),
            fonts: ConfigEntry::with_default(docs::FONTS),
            draw_bold_text_with_bright_colors: ConfigEntry::new(
                false,
                docs::DRAW_BOLD_TEXT_WITH_BRIGHT_COLORS,
            ),
            colors: ConfigEntry::with_default(docs::COLORS),
            normal_mode: ConfigEntry::new(
                CursorConfig::new(CursorShape::Block, false),
                docs::NORMAL_MODE_CURSOR,
            ),
            insert_mode: ConfigEntry::new(
                CursorConfig::new(CursorShape::Bar, true),
                docs::INSERT_MODE_CURSOR,
            ),
            visual_mode: ConfigEntry::new(
                CursorConfig::new(CursorShape::Block, false),
                docs::VISUAL_MODE_CURSOR,
            ),
            status_line: ConfigEntry::with_default(docs::STATUS_LINE),
            background: ConfigEntry::with_default(docs::BACKGROUND),
            bell: ConfigEntry::with_default(docs::BELL),
            highlight_timeout: ConfigEntry::new(
                defaults::highlight_timeout(),
                docs::HIGHLIGHT_TIMEOUT,
            ),
            vi_mode_scrolloff: ConfigEntry::new(
                defaults::vi_mode_scrolloff(),
                docs::VI_MODE_SCROLLOFF,
            ),
            smooth_line_scrolling: ConfigEntry::new(
                defaults::smooth_line_scrolling(),
                docs::SMOOTH_LINE_SCROLLING,
            ),
        }
    }
}

impl TerminalProfile {
    /// Cursor settings for the current input mode.
    pub fn cursor(&self, mode: InputMode) -> &CursorConfig {
        match mode {
            InputMode::Normal => &self.normal_mode,
            InputMode::Insert => &self.insert_mode,
            InputMode::Visual => &self.visual_mode,
        }
    }
}

/// Vi-style input mode of the terminal, selecting the cursor appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    Normal,
    Insert,
    Visual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_values() {
        let profile = TerminalProfile::default();
        assert_eq!(profile.fonts.size, 12.0);
        assert_eq!(*profile.terminal_id, TerminalId::Vt525);
        assert_eq!(profile.terminal_size.columns, 80);
        assert_eq!(*profile.tab_width, 8);
        assert_eq!(profile.history.limit, Some(8000));
        assert!(*profile.show_title_bar);
    }

    #[test]
    fn test_clone_is_field_equal() {
        let profile = TerminalProfile::default();
        let mut copy = profile.clone();
        assert_eq!(profile, copy);

        copy.fonts.value_mut().size = 14.0;
        assert_ne!(profile, copy);
        assert_eq!(profile.colors, copy.colors);
    }

    #[test]
    fn test_cursor_per_mode() {
        let profile = TerminalProfile::default();
        assert_eq!(profile.cursor(InputMode::Insert).shape, CursorShape::Bar);
        assert_eq!(profile.cursor(InputMode::Normal).shape, CursorShape::Block);
    }
}
