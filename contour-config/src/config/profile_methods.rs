//! `impl Config` lookups over profiles, color schemes and input mappings.

use super::config_struct::Config;
use crate::profile::TerminalProfile;
use crate::types::ColorPalette;
use contour_keybindings::{Action, Key, ModeFlags, Modifiers, MouseButton};

impl Config {
    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&TerminalProfile> {
        self.profiles.get(name)
    }

    pub fn profile_mut(&mut self, name: &str) -> Option<&mut TerminalProfile> {
        self.profiles.value_mut().get_mut(name)
    }

    /// The profile named by `default_profile`.
    ///
    /// The reader always inserts it; `None` only for a hand-built `Config`.
    pub fn default_profile(&self) -> Option<&TerminalProfile> {
        self.profile(self.default_profile.as_str())
    }

    /// Profile names, sorted.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Color palette a profile renders with for the given desktop appearance.
    ///
    /// Unknown scheme names fall back to the built-in palette.
    pub fn color_palette(&self, profile: &TerminalProfile, dark_mode: bool) -> ColorPalette {
        let name = profile.colors.scheme_name(dark_mode);
        match self.color_schemes.get(name) {
            Some(palette) => *palette,
            None => {
                log::debug!("Color scheme '{name}' not defined, using the built-in palette");
                ColorPalette::default()
            }
        }
    }

    /// Actions bound to a named key in the given modes.
    pub fn resolve_key(&self, key: Key, modifiers: Modifiers, modes: ModeFlags) -> Option<&[Action]> {
        self.input_mappings.resolve_key(key, modifiers, modes)
    }

    /// Actions bound to a character in the given modes.
    pub fn resolve_char(&self, ch: char, modifiers: Modifiers, modes: ModeFlags) -> Option<&[Action]> {
        self.input_mappings.resolve_char(ch, modifiers, modes)
    }

    /// Actions bound to a mouse button in the given modes.
    pub fn resolve_mouse(
        &self,
        button: MouseButton,
        modifiers: Modifiers,
        modes: ModeFlags,
    ) -> Option<&[Action]> {
        self.input_mappings.resolve_mouse(button, modifiers, modes)
    }
}
